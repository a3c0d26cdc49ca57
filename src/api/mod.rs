//! API Module
//!
//! HTTP access to the PokeAPI, memoized through the response cache.

pub mod client;

pub use client::PokeClient;
