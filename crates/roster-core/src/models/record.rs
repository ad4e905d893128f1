//! Record entity - one row of remote data held by value.

use crate::{RecordFields, RecordId, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A record as confirmed by the remote store.
///
/// On the read path the wire object carries the identifier next to the
/// scalar fields, which is why `fields` is flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl Record {
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }

    /// Encode into the read-shape JSON object (identifier included).
    ///
    /// Absent optional fields are left out, as they are on the wire.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "id": self.id.as_str(),
            "name": self.fields.name,
        });
        if let Some(age) = self.fields.age {
            payload["age"] = json!(age);
        }
        if let Some(ref email) = self.fields.email {
            payload["email"] = json!(email);
        }
        payload
    }

    /// Decode from a read-shape JSON object
    pub fn from_payload(payload: Value) -> CoreErrorResult<Self> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}
