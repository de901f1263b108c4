use codebook_domain::config::Settings;
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides (`CODEBOOK__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "CODEBOOK";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "codebook";

/// Custom error type for config loading.
#[codebook_derive::codebook_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a file first, environment overrides on top.
///
/// * An explicit [`ConfigLoader::path`] must exist. Without one, `codebook.{toml,json,yaml,..}`
///   in the working directory is used when present and skipped otherwise.
/// * Environment variables prefixed with `CODEBOOK__` override file values; nested keys are
///   separated by `__` (`CODEBOOK__RUNTIME__MAX_RETRIES` maps to `runtime.max_retries`).
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the given file instead of the optional default one.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment with a fixed set of variables.
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if the
    /// merged values do not fit `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let file = match &self.path {
            Some(path) => {
                info!("Loading config from {}", path.display());
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!("No config path given, looking for optional '{DEFAULT_CONFIG_FILE}' file");
                File::with_name(DEFAULT_CONFIG_FILE).required(false)
            },
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .source(self.env);

        Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads any deserializable configuration with the default layering.
///
/// # Errors
/// See [`ConfigLoader::load`].
///
/// # Example
/// ```rust
/// use codebook_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.path(path),
        None => loader,
    }
    .load()
}

/// Loads the application [`Settings`].
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Settings, ConfigError> {
    let settings: Settings = load_config(path)?;
    info!(
        app = %settings.app.name,
        version = %settings.app.version,
        flags = %settings.runtime.flags,
        "Settings loaded"
    );
    Ok(settings)
}
