//! Pokedex - A REPL client for browsing PokeAPI location areas
//!
//! Response bodies are memoized in a time-expiring in-memory cache so that
//! paging back and forth does not repeat network calls.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeClient;
pub use cache::TimedCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::{CommandRegistry, Repl};
