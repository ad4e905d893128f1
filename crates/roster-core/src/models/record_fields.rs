use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Longest display name accepted from user input
pub const MAX_NAME_LENGTH: usize = 200;

/// Writable attributes of a record.
///
/// This is exactly what goes over the wire on create and update: the
/// identifier is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RecordFields {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            age: None,
            email: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check user-supplied fields before they are sent anywhere.
    pub fn validate(&self) -> CoreErrorResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name cannot be empty"));
        }

        let name_length = name.chars().count();
        if name_length > MAX_NAME_LENGTH {
            return Err(CoreError::validation(format!(
                "name must be at most {} characters, got {}",
                MAX_NAME_LENGTH, name_length
            )));
        }

        if let Some(ref email) = self.email {
            let valid = match email.split_once('@') {
                Some((local, domain)) => {
                    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
                }
                None => false,
            };
            if !valid {
                return Err(CoreError::validation(format!(
                    "email is not a valid address: {}",
                    email
                )));
            }
        }

        Ok(())
    }
}
