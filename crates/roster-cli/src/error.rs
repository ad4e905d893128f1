use roster_client::ClientError;
use roster_config::ConfigError;
use roster_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Could not load records: {message} {location}")]
    Refresh {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record not found: {id} {location}")]
    NotFound {
        id: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    #[track_caller]
    pub fn refresh<S: Into<String>>(message: S) -> Self {
        CliError::Refresh {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        CliError::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
