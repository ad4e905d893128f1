use crate::{ApiBackend, ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_COLLECTION};

use serde::Deserialize;

/// Where the records live and how to talk to that store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub backend: ApiBackend,
    /// Server address, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
    /// Collection (resource) name, e.g. "users"
    pub collection: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: ApiBackend::default(),
            base_url: String::from(DEFAULT_BASE_URL),
            collection: String::from(DEFAULT_COLLECTION),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let host = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"))
            .ok_or_else(|| {
                ConfigError::api(format!(
                    "api.base_url must start with http:// or https://, got '{}'",
                    self.base_url
                ))
            })?;

        if host.trim_matches('/').is_empty() || host.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.base_url has no host: '{}'",
                self.base_url
            )));
        }

        if self.collection.is_empty() {
            return Err(ConfigError::api("api.collection cannot be empty"));
        }

        if self
            .collection
            .chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace())
        {
            return Err(ConfigError::api(format!(
                "api.collection must be a single path segment, got '{}'",
                self.collection
            )));
        }

        Ok(())
    }
}
