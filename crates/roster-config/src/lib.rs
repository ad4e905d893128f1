mod api_backend;
mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_backend::ApiBackend;
pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".roster";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_COLLECTION: &str = "users";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
