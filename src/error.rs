//! Error types for designkit-mcp.
//!
//! Token lookup failures carry structured fields (requested path, theme,
//! suggestions, sample of available paths) so callers can branch on the
//! error kind instead of parsing message text. The rendered `Display`
//! output is the user-facing message returned through the MCP surface.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    ///
    /// Only raised for paths named on the command line; the default
    /// location falls back to built-in defaults when absent.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path to the configuration file.
        path: PathBuf,
    },

    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors produced by design-token lookups.
///
/// One failed lookup is never fatal to the serving process; these are
/// surfaced as tool-level errors and the server keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A required tool parameter was omitted.
    #[error("missing required parameter: {name}")]
    MissingArgument {
        /// Name of the missing parameter.
        name: &'static str,
    },

    /// The requested path does not resolve in the given token tree.
    #[error("{}", render_not_found(.category, .requested, .theme, .suggestions, .sample, *.total))]
    TokenNotFound {
        /// Token category label ("Color", "Spacing", ...).
        category: &'static str,
        /// The path that was requested.
        requested: String,
        /// The theme the lookup ran against (after default fallback).
        theme: String,
        /// Up to 3 similar token paths, nearest first.
        suggestions: Vec<String>,
        /// Up to 10 available token paths, in tree order.
        sample: Vec<String>,
        /// Total number of available token paths.
        total: usize,
    },

    /// The requested theme has no entry in the theme registry.
    ///
    /// Only whole-theme fetches fail this way; per-token lookups fall
    /// back to the default theme instead.
    #[error("Theme '{theme}' not found")]
    ThemeNotFound {
        /// The theme that was requested.
        theme: String,
    },
}

/// Renders the "not found" message: requested path, theme, up to 3
/// "did you mean" suggestions, and a sample of available paths with a
/// count of how many more exist beyond it.
fn render_not_found(
    category: &str,
    requested: &str,
    theme: &str,
    suggestions: &[String],
    sample: &[String],
    total: usize,
) -> String {
    let mut message = format!("{category} token '{requested}' not found in theme '{theme}'.");

    if !suggestions.is_empty() {
        let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
        message.push_str(&format!(" Did you mean: {}?", quoted.join(", ")));
    }

    if total > 0 {
        let more = total.saturating_sub(sample.len());
        let more_text = if more > 0 {
            format!(" (and {more} more)")
        } else {
            String::new()
        };
        message.push_str(&format!(
            " Available tokens: {}{more_text}",
            sample.join(", ")
        ));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_display() {
        let error = TokenError::MissingArgument { name: "colorName" };
        assert_eq!(error.to_string(), "missing required parameter: colorName");
    }

    #[test]
    fn token_not_found_full_message() {
        let error = TokenError::TokenNotFound {
            category: "Color",
            requested: "primry.500".to_string(),
            theme: "default".to_string(),
            suggestions: vec!["primary.500".to_string(), "primary.600".to_string()],
            sample: vec![
                "primary.500".to_string(),
                "primary.600".to_string(),
                "success".to_string(),
            ],
            total: 3,
        };
        let msg = error.to_string();
        assert!(msg.contains("Color token 'primry.500' not found in theme 'default'."));
        assert!(msg.contains("Did you mean: 'primary.500', 'primary.600'?"));
        assert!(msg.contains("Available tokens: primary.500, primary.600, success"));
        assert!(!msg.contains("more)"));
    }

    #[test]
    fn token_not_found_reports_overflow_count() {
        let sample: Vec<String> = (0..10).map(|i| format!("token{i}")).collect();
        let error = TokenError::TokenNotFound {
            category: "Spacing",
            requested: "zz".to_string(),
            theme: "default".to_string(),
            suggestions: vec![],
            sample,
            total: 14,
        };
        let msg = error.to_string();
        assert!(msg.contains("(and 4 more)"));
        assert!(!msg.contains("Did you mean"));
    }

    #[test]
    fn theme_not_found_display() {
        let error = TokenError::ThemeNotFound {
            theme: "vaporwave".to_string(),
        };
        assert_eq!(error.to_string(), "Theme 'vaporwave' not found");
    }

    #[test]
    fn config_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        assert!(error.to_string().contains("invalid setting"));
    }
}
