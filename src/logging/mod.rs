// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger init error: {0}")]
    Init(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

// The configured file, or stderr plus the reason the file was unusable
fn log_target(path: &Path) -> (env_logger::Target, Option<LoggingError>) {
    match open_log_file(path) {
        Ok(file) => (env_logger::Target::Pipe(Box::new(file)), None),
        Err(e) => (env_logger::Target::Stderr, Some(e)),
    }
}

/// Send `log` output to the configured file. Falls back to stderr when the
/// file cannot be opened.
pub fn init(config: &Config) -> Result<()> {
    let (target, file_error) = log_target(&config.log_file);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(target)
        .try_init()?;

    match file_error {
        Some(e) => log::warn!(
            "Could not open log file {}: {}. Logging to stderr",
            config.log_file.display(),
            e
        ),
        None => log::debug!("Logging to {}", config.log_file.display()),
    }

    Ok(())
}
