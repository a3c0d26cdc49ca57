//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. Cache operations never
//! fail; these errors come from fetching and decoding API pages.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the API client and REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PokedexError::Status {
            status: 404,
            url: "https://pokeapi.co/api/v2/location-area/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from https://pokeapi.co/api/v2/location-area/"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PokedexError = serde_err.into();

        assert!(matches!(err, PokedexError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }

    #[test]
    fn test_io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PokedexError = io_err.into();

        assert!(matches!(err, PokedexError::Io(_)));
    }
}
