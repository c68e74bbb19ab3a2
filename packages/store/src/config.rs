//! # Client configuration — `records.toml`
//!
//! Optional TOML file read by the front end. Every section may be omitted;
//! a missing or empty file equals [`RecordsConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "https://68370974664e72d28e433992.mockapi.io/api/v1"
//!
//! [table]
//! page_size = 5
//!
//! [notifications]
//! duration_secs = 2
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Mock API the records collection lives under.
pub const DEFAULT_BASE_URL: &str = "https://68370974664e72d28e433992.mockapi.io/api/v1";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page. Zero is treated as one.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    5
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a notice stays on screen.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
}

fn default_duration_secs() -> u32 {
    2
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

impl RecordsConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.table.page_size = page_size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "records.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
