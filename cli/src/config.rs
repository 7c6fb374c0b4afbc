//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `heroes.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::time::Duration;

use serde::Deserialize;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "heroes.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hero API settings.
    pub api: ApiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where and how to reach the hero API.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `api/heroes` path is joined onto.
    pub base_url: String,
    /// Per-request timeout. Unset means the transport's own default.
    pub timeout_secs: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from `heroes.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Parse configuration from TOML text, without overrides or validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides looked up through `var` (the environment in
    /// production).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `HEROES_API_TIMEOUT` is not a
    /// whole number of seconds.
    pub fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("HEROES_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = var("HEROES_API_TIMEOUT") {
            let secs = val.trim().parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "HEROES_API_TIMEOUT must be a whole number of seconds, got {val:?}"
                ))
            })?;
            self.api.timeout_secs = Some(secs);
        }
        if let Some(val) = var("HEROES_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the base URL is not http(s)
    /// or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "heroes=info,heroes_cli=info,heroes_core=info".to_string(),
        }
    }
}
