//! Error types for path access operations.
//!
//! These errors describe why a path could not be resolved or written, and
//! carry the offending segment or path so callers can report it.

use thiserror::Error;

use crate::value::Value;

/// Structured error types for path operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A segment of the path does not resolve at its depth
    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },

    /// The path cannot address a value
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A value could not be converted to the requested type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl AccessError {
    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        AccessError::KeyNotFound { key: key.into() }
    }

    pub(crate) fn type_mismatch(expected: &str, actual: &Value) -> Self {
        AccessError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    /// Check if this error is a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccessError::KeyNotFound { .. })
    }

    /// Check if this error is an unusable path
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, AccessError::InvalidPath { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, AccessError::TypeMismatch { .. })
    }

    /// Get the missing segment if this is a not-found error
    pub fn key(&self) -> Option<&str> {
        match self {
            AccessError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            AccessError::InvalidPath { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from AccessError to the main Error type
impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
