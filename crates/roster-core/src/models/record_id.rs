//! Record identifier as assigned by the remote store.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of a record.
///
/// Stores disagree on the wire type: a generic JSON API usually hands out
/// integers while a keyed store hands out string keys. Both decode into the
/// same string-backed id, and the id always encodes as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(s) => RecordId(s),
            WireId::Unsigned(n) => RecordId(n.to_string()),
            WireId::Signed(n) => RecordId(n.to_string()),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
