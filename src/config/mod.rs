//! Configuration module for keytrie.
//!
//! Settings load from a file (TOML, YAML, JSON) layered over the built-in
//! defaults, and can be overridden with environment variables. All values
//! are validated before use.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;
use crate::error::KeytrieResult;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable prefix for configuration overrides, as in
/// `KEYTRIE__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "KEYTRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for keytrie.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KeytrieConfig {
    /// Log configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl KeytrieConfig {
    /// Renders the configuration as a TOML document.
    pub fn to_toml_string(&self) -> KeytrieResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for KeytrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.log.validate()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for keytrie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment
    /// variables, in increasing order of precedence.
    ///
    /// # Returns
    ///
    /// * `Ok(KeytrieConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KeytrieConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&KeytrieConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            tracing::debug!(path = ?path, ?format, "Loading configuration file");
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let keytrie_config: KeytrieConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        keytrie_config.validate()?;

        Ok(keytrie_config)
    }
}

static GLOBAL_CONFIG: OnceCell<KeytrieConfig> = OnceCell::new();

/// Stores `config` as the process-wide configuration.
///
/// Only the first call takes effect; later calls log a warning. Returns the
/// configuration actually stored.
pub fn init_global_config(config: KeytrieConfig) -> &'static KeytrieConfig {
    let mut stored_now = false;
    let global = GLOBAL_CONFIG.get_or_init(|| {
        stored_now = true;
        config
    });
    if !stored_now {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
    global
}

/// Returns the process-wide configuration, if [`init_global_config`] has
/// run.
pub fn global_config() -> Option<&'static KeytrieConfig> {
    GLOBAL_CONFIG.get()
}
