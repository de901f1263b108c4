//! # Logger
//!
//! Installs the global `tracing` subscriber for codebook processes: compact console output,
//! optional rolling files (plain or JSON) written through a non-blocking worker, and
//! `RUST_LOG`-aware filtering.
//!
//! ## Example
//!
//! ```rust
//! use codebook_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("my-app").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::info!("ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Builder for the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl LoggerBuilder {
    /// Enables or disables console output (on by default).
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes rolling log files into `directory`, named `<name>.<date>.log`.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Minimum level emitted when `RUST_LOG` and [`Self::env_filter`] say nothing else.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Log file rotation strategy (daily by default).
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Number of rotated files to keep.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Writes file output as JSON lines. Console output stays compact.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Adds explicit filter directives (e.g. `codebook=debug,config=warn`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer guard and must be kept alive until
    /// shutdown so buffered lines get flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`, a bad
    ///   filter, or when neither console nor file output is enabled.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.build_env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(directory) = &self.directory {
            fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create {}", directory.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(self.rotation.clone())
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.max_files)
                .build(directory)
                .context("Failed to build rolling file appender")?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, file = guard.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err("Logger name cannot be empty".into_invalid());
        }
        if self.max_files == 0 {
            return Err("max_files must be greater than zero".into_invalid());
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.env_filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |filter| {
                builder.parse(filter).map_err(|e| {
                    format!("Invalid env filter '{filter}': {e}").into_invalid()
                })
            },
        )
    }
}

trait IntoInvalid {
    fn into_invalid(self) -> LoggerError;
}

impl<S: Into<std::borrow::Cow<'static, str>>> IntoInvalid for S {
    fn into_invalid(self) -> LoggerError {
        LoggerError::InvalidConfiguration { message: self.into(), context: None }
    }
}

/// Handle to the initialized logging system.
///
/// Holds the background file writer guard, if any. Drop it only at shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a [`LoggerBuilder`]. `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name such as `"debug"` or `"off"` (case-insensitive).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}
