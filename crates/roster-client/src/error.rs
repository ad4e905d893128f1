use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Longest slice of a failed response body kept in the error message
const MAX_REMOTE_MESSAGE_LENGTH: usize = 200;

/// Errors that can occur during store calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The store answered with a status other than the one the operation expects
    #[error("Remote failure: status {status}: {message} {location}")]
    Remote {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Build a remote failure from the raw status and response body
    #[track_caller]
    pub fn remote(status: u16, body: &[u8]) -> Self {
        ClientError::Remote {
            status,
            message: remote_message(body),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status of a remote failure, None for transport and decode errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

/// Pull a readable message out of an error body.
///
/// Understands `{"error": "text"}` and `{"error": {"message": "text"}}`,
/// otherwise falls back to the raw body.
pub(crate) fn remote_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body)
        && let Some(error) = value.get("error")
    {
        if let Some(text) = error.as_str() {
            return text.to_string();
        }
        if let Some(text) = error.get("message").and_then(|v| v.as_str()) {
            return text.to_string();
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return String::from("empty response body");
    }

    text.chars().take(MAX_REMOTE_MESSAGE_LENGTH).collect()
}

pub type Result<T> = std::result::Result<T, ClientError>;
