//! Cache Module
//!
//! Provides an in-memory response cache with interval-based expiry.

mod entry;
mod store;
mod timed;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use timed::TimedCache;
