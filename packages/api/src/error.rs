use store::StoreError;
use thiserror::Error;

/// Errors setting up the HTTP record store.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid records API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Map a transport-level failure onto the store's error type.
pub(crate) fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_decode() {
        StoreError::Decode(err.to_string())
    } else {
        StoreError::Unavailable(err.to_string())
    }
}
