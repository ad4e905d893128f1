use crate::{CliError, CliResult};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// Stdout is left alone: it carries the command's JSON output. Fails if a
/// logger is already installed for this process.
pub fn initialize(
    log_level: roster_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let output = if let Some(ref log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| {
                CliError::logger(format!(
                    "Failed to open log file {}: {}",
                    log_path.display(),
                    e
                ))
            })?;

        Dispatch::new()
            .format(|out, _, record| out.finish(format_args!("{}", line(record.level(), record))))
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, _, record| {
                out.finish(format_args!("{}", line(colors.color(record.level()), record)))
            })
            .chain(std::io::stderr())
    } else {
        Dispatch::new()
            .format(|out, _, record| out.finish(format_args!("{}", line(record.level(), record))))
            .chain(std::io::stderr())
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// `[{rfc3339} - {level}] {message} [{file}:{line}]`
pub(crate) fn line(level: impl fmt::Display, record: &Record<'_>) -> String {
    format!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        record.args(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    )
}
