//! Facade crate for codebook.
//! Re-exports the domain types and wires configuration into logging at startup.
//! Keep this crate thin: it composes the other crates, it does not implement domain logic.
//!
//! ## Usage
//! ```rust,no_run
//! use codebook::{Enumeration, FlagSet, Priority};
//!
//! let runtime = codebook::bootstrap(Some("codebook.toml"))?;
//! let priority = runtime.settings().runtime.priority;
//! tracing::info!(priority = Priority::render(priority.code()), "Started");
//! # Ok::<(), codebook::BootstrapError>(())
//! ```

use codebook_domain::config::Settings;
use codebook_kernel::config::{ConfigError, load_settings};
use codebook_logger::{LevelFilter, Logger, LoggerBuilder, LoggerError, parse_level};
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

pub use codebook_domain as domain;
pub use codebook_domain::{
    Color, ConfigFlags, DomainError, Enumeration, FlagSet, HttpMethod, Permission, Priority,
    Status,
};
pub use codebook_kernel as kernel;
pub use codebook_logger as logger;

/// Startup failures.
#[codebook_derive::codebook_error]
pub enum BootstrapError {
    #[error("Configuration failed{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logger failed{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },
}

/// Everything a process holds on to after [`bootstrap`].
#[derive(Debug)]
pub struct Runtime {
    settings: Settings,
    logger: Logger,
}

impl Runtime {
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Splits the runtime so the logger guard can live in a different scope.
    pub fn into_parts(self) -> (Settings, Logger) {
        (self.settings, self.logger)
    }
}

/// Loads [`Settings`] and installs the global logger they describe.
///
/// # Errors
/// * [`BootstrapError::Config`] if the settings cannot be loaded.
/// * [`BootstrapError::Logger`] if the logging section is invalid or a global subscriber is
///   already installed.
pub fn bootstrap(path: Option<impl AsRef<Path>>) -> Result<Runtime, BootstrapError> {
    let settings = load_settings(path).context("Loading settings")?;
    let logger = logger_builder(&settings)
        .and_then(LoggerBuilder::init)
        .context("Starting logger")?;

    info!(
        app = %settings.app.name,
        version = %settings.app.version,
        author = %settings.app.author,
        build_time = settings.app.build_time.as_deref().unwrap_or("unknown"),
        max_retries = settings.runtime.max_retries,
        priority = %settings.runtime.priority,
        flags = %settings.runtime.flags,
        "Bootstrap complete"
    );

    Ok(Runtime { settings, logger })
}

/// Level the logger starts with: `logging.level`, raised to at least `DEBUG` when
/// `runtime.debug` is set or the `EnableDebug` flag is present.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
pub fn effective_level(settings: &Settings) -> Result<LevelFilter, LoggerError> {
    let level = parse_level(&settings.logging.level)?;
    if settings.runtime.debug || settings.runtime.flags.has(ConfigFlags::ENABLE_DEBUG) {
        return Ok(level.max(LevelFilter::DEBUG));
    }
    Ok(level)
}

/// Translates the logging section of [`Settings`] into a [`LoggerBuilder`].
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
pub fn logger_builder(settings: &Settings) -> Result<LoggerBuilder, LoggerError> {
    let logging = &settings.logging;

    let mut builder =
        Logger::builder(&settings.app.name).level(effective_level(settings)?).json(logging.json);
    if let Some(directory) = &logging.directory {
        builder = builder.directory(directory);
    }
    if let Some(filter) = &logging.filter {
        builder = builder.env_filter(filter);
    }
    Ok(builder)
}
