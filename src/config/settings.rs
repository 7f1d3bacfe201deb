//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::tokens::TokenStore;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Default token theme used when a tool call names none.
    #[serde(default)]
    pub default_theme: Option<String>,

    /// Base URL for the n8n webhook the AI router forwards to.
    #[serde(default)]
    pub n8n_webhook_url: Option<String>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref theme) = self.default_theme {
            if theme.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "default_theme must not be empty".to_string(),
                });
            }
            if !TokenStore::known_theme(theme) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Unknown default_theme '{theme}'. Available themes: {}",
                        TokenStore::theme_names().join(", ")
                    ),
                });
            }
        }

        if let Some(ref url) = self.n8n_webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("n8n_webhook_url must be an http(s) URL, got '{url}'"),
                });
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
