use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record payload error: {message} {location}")]
    Payload {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn payload<S: Into<String>>(message: S) -> Self {
        CoreError::Payload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CoreError::payload(err.to_string())
    }
}

pub type Result<T> = StdResult<T, CoreError>;
