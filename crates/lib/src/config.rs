//! Path token configuration.
//!
//! [`PathConfig`] holds the three tokens every path operation reads at call
//! time: the segment separator, the escape marker and the index identifier.
//! Setters perform no validation; [`PathConfig::validate`] is available for
//! callers that want to reject ambiguous combinations up front.
//!
//! ```
//! use keypath::PathConfig;
//!
//! let config = PathConfig::default().with_separator("/");
//! assert_eq!(config.separator(), "/");
//! assert_eq!(config.escape(), "\\");
//!
//! // Partial documents only override the fields they name
//! let config = PathConfig::from_json_str(r#"{"index_identifier": "[]"}"#)?;
//! assert_eq!(config.separator(), ".");
//! assert_eq!(config.index_identifier(), "[]");
//! # Ok::<(), keypath::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_ESCAPE, DEFAULT_INDEX_IDENTIFIER, DEFAULT_SEPARATOR};

/// Errors produced while loading or validating a [`PathConfig`].
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A token was configured as the empty string
    #[error("Path token '{name}' must not be empty")]
    EmptyToken { name: &'static str },

    /// Escape and separator are identical, so escaping cannot be told apart from splitting
    #[error("Escape token '{escape}' is ambiguous with separator '{separator}'")]
    AmbiguousTokens { separator: String, escape: String },

    /// The configuration document could not be parsed
    #[error("Failed to parse path configuration: {reason}")]
    Parse { reason: String },
}

impl ConfigError {
    /// Check if this error came from parsing a configuration document
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::Parse { .. })
    }

    /// Check if this error came from validating token values
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ConfigError::EmptyToken { .. } | ConfigError::AmbiguousTokens { .. }
        )
    }
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_escape() -> String {
    DEFAULT_ESCAPE.to_string()
}

fn default_index_identifier() -> String {
    DEFAULT_INDEX_IDENTIFIER.to_string()
}

/// The tokens used to read and write path strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathConfig {
    /// Delimits segments
    #[serde(default = "default_separator")]
    separator: String,
    /// Makes the following separator literal
    #[serde(default = "default_escape")]
    escape: String,
    /// Segment meaning "next free integer key", honoured on write only
    #[serde(default = "default_index_identifier")]
    index_identifier: String,
}

impl PathConfig {
    /// Creates a configuration with the default tokens (`.`, `\`, `<i>`).
    pub fn new() -> Self {
        Self {
            separator: default_separator(),
            escape: default_escape(),
            index_identifier: default_index_identifier(),
        }
    }

    /// Loads a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    pub fn escape(&self) -> &str {
        &self.escape
    }

    pub fn set_escape(&mut self, escape: impl Into<String>) {
        self.escape = escape.into();
    }

    pub fn index_identifier(&self) -> &str {
        &self.index_identifier
    }

    pub fn set_index_identifier(&mut self, identifier: impl Into<String>) {
        self.index_identifier = identifier.into();
    }

    /// Builder method to replace the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }

    /// Builder method to replace the escape marker
    pub fn with_escape(mut self, escape: impl Into<String>) -> Self {
        self.set_escape(escape);
        self
    }

    /// Builder method to replace the index identifier
    pub fn with_index_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.set_index_identifier(identifier);
        self
    }

    /// Rejects token combinations that make path parsing ambiguous.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyToken`] if any token is empty
    /// - [`ConfigError::AmbiguousTokens`] if escape equals separator
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, token) in [
            ("separator", &self.separator),
            ("escape", &self.escape),
            ("index_identifier", &self.index_identifier),
        ] {
            if token.is_empty() {
                return Err(ConfigError::EmptyToken { name });
            }
        }

        if self.escape == self.separator {
            return Err(ConfigError::AmbiguousTokens {
                separator: self.separator.clone(),
                escape: self.escape.clone(),
            });
        }

        Ok(())
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new()
    }
}
