//! Response models for the PokeAPI
//!
//! This module defines the DTOs used to deserialize cached response bodies.

pub mod responses;

pub use responses::{LocationAreaPage, NamedResource};
