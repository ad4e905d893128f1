use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Wire variant spoken by the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiBackend {
    /// Generic JSON API: `/{collection}` and `/{collection}/{id}`
    #[default]
    Rest,
    /// Keyed real-time database: `/{collection}.json`, server-assigned keys
    Keyed,
}

impl ApiBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiBackend::Rest => "rest",
            ApiBackend::Keyed => "keyed",
        }
    }
}

impl fmt::Display for ApiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rest" => Ok(ApiBackend::Rest),
            "keyed" => Ok(ApiBackend::Keyed),
            other => Err(ConfigError::api(format!(
                "unknown backend '{}', expected 'rest' or 'keyed'",
                other
            ))),
        }
    }
}

/// Same spellings as the env override and `--backend`: case and surrounding
/// whitespace are ignored.
impl<'de> Deserialize<'de> for ApiBackend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
