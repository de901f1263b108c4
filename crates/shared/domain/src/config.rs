use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_AUTHOR, DEFAULT_LOG_LEVEL, DEFAULT_MAX_RETRIES, DEFAULT_VERSION,
};
use crate::{ConfigFlags, Priority};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Application settings, constructed once at startup and handed to whoever needs them.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsInner {
    pub app: AppConfig,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "SettingsInner")]
pub struct Settings {
    inner: Arc<SettingsInner>,
}

impl From<SettingsInner> for Settings {
    fn from(inner: SettingsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Settings {
    fn deref_mut(&mut self) -> &mut SettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Identity of the running application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub author: String,
    /// Left empty unless the build pipeline stamps it.
    pub build_time: Option<String>,
}

/// Behavior switches read by the services at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub debug: bool,
    pub max_retries: u32,
    /// Raw bits (`12`) or rendered labels (`"EnableCache,EnableDebug"`).
    pub flags: ConfigFlags,
    pub priority: Priority,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Extra env-filter directives, e.g. `codebook=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            author: DEFAULT_AUTHOR.to_owned(),
            build_time: None,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_retries: DEFAULT_MAX_RETRIES,
            flags: ConfigFlags::default(),
            priority: Priority::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_owned(), directory: None, json: false, filter: None }
    }
}
