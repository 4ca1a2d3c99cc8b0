//! Error type for schema decoding and column serialization.
//!
//! Building columns never fails; errors only come from the surrounding IO and JSON boundaries.

use thiserror::Error;

/// Errors raised at the JSON and IO boundaries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid schema description: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to serialize columns: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the facade crate.
pub type Result<T> = std::result::Result<T, Error>;
