use thiserror::Error;

use crate::models::RecordKey;

/// Failure talking to a [`crate::RecordStore`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    /// The store answered with a non-success status.
    #[error("record store returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("record {0} not found")]
    NotFound(RecordKey),
    /// The response body did not match the record shape.
    #[error("malformed record data: {0}")]
    Decode(String),
}

/// Failure reading `records.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid records config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize records config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
