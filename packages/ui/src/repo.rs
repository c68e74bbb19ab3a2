//! Shared record store constructor for all platforms.
//!
//! Returns an [`api::HttpRecordStore`] pointed at the configured collection:
//! - **Web** (WASM): the `[api]` section of the provided [`store::RecordsConfig`]
//! - **Native**: `RECORDS_API_URL` (or `.env`) when set, otherwise the config

use api::{ApiConfig, ApiError, HttpRecordStore};
use store::RecordsConfig;

/// Create the HTTP record store for this platform.
pub fn make_store(config: &RecordsConfig) -> Result<HttpRecordStore, ApiError> {
    let api_config = api_config(config)?;
    tracing::info!(url = %api_config.collection_url(), "using records API");
    HttpRecordStore::new(&api_config)
}

#[cfg(target_arch = "wasm32")]
fn api_config(config: &RecordsConfig) -> Result<ApiConfig, ApiError> {
    ApiConfig::from_records_config(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn api_config(config: &RecordsConfig) -> Result<ApiConfig, ApiError> {
    ApiConfig::from_env(config)
}
