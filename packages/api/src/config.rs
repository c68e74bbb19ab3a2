//! Records API configuration from the environment.

use reqwest::Url;
use store::RecordsConfig;

use crate::error::ApiError;

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "RECORDS_API_URL";

/// Where the `/userrecord/` collection lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) URL".to_string(),
            });
        }
        Ok(Self { base_url: parsed })
    }

    /// Use the `[api]` section of a `records.toml`.
    pub fn from_records_config(config: &RecordsConfig) -> Result<Self, ApiError> {
        Self::new(&config.api.base_url)
    }

    /// Read `RECORDS_API_URL` (loading `.env` first), falling back to
    /// `fallback`'s `[api]` section.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env(fallback: &RecordsConfig) -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        match std::env::var(BASE_URL_VAR) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::from_records_config(fallback),
        }
    }

    /// `{base}/userrecord/`
    pub fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("userrecord").push("");
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_appends_resource() {
        let config = ApiConfig::new("https://example.com/api/v1").unwrap();
        assert_eq!(config.collection_url().as_str(), "https://example.com/api/v1/userrecord/");

        let config = ApiConfig::new("https://example.com/api/v1/").unwrap();
        assert_eq!(config.collection_url().as_str(), "https://example.com/api/v1/userrecord/");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("mailto:someone@example.com").is_err());
        assert!(ApiConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn default_points_at_mock_api() {
        assert_eq!(
            ApiConfig::from_records_config(&RecordsConfig::default())
                .unwrap()
                .collection_url()
                .as_str(),
            "https://68370974664e72d28e433992.mockapi.io/api/v1/userrecord/"
        );
    }
}
