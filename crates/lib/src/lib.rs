//!
//! keypath: read, write, test and remove values in nested containers by path.
//!
//! ## Core Concepts
//!
//! * **Containers (`value::Container`)**: Insertion-ordered maps from integer or string keys to values. Containers nest to form a tree.
//! * **Values (`value::Value`)**: Scalars (null, bool, int, float, text) or nested containers.
//! * **Paths (`path`)**: Strings such as `user.profile.name`, split on a separator. An escape marker keeps a separator inside a key (`images.logo\.png`).
//! * **Accessor (`access::PathAccessor`)**: Resolves paths against containers: `get`, `set`, `has`, `remove`, plus `escape`/`unescape` for building paths from raw keys.
//! * **Configuration (`config::PathConfig`)**: The separator, escape marker and index identifier (`<i>`, "append at the next free integer key") every operation reads at call time.
//!
//! ```
//! use keypath::{Container, PathAccessor};
//!
//! let accessor = PathAccessor::new();
//! let mut doc = Container::new();
//! accessor.set(&mut doc, "users.<i>.name", "Alice")?;
//! accessor.set(&mut doc, "users.<i>.name", "Bob")?;
//!
//! assert_eq!(accessor.get_as::<&str>(&doc, "users.1.name"), Some("Bob"));
//! assert!(accessor.get(&doc, "users.2.name").unwrap_err().is_not_found());
//! # Ok::<(), keypath::Error>(())
//! ```

pub mod access;
pub mod config;
pub mod constants;
pub mod path;
pub mod value;

pub use access::{AccessError, PathAccessor};
pub use config::{ConfigError, PathConfig};
pub use value::{Container, Key, Value};

/// Result type used throughout the keypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keypath library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Structured path access errors from the access module
    #[error(transparent)]
    Access(access::AccessError),

    /// Structured configuration errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Access(_) => "access",
            Error::Config(_) => "config",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a path that cannot address a value.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_invalid_path(),
            _ => false,
        }
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is configuration-related.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Get the missing segment if this is a not-found error.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Access(access_err) => access_err.key(),
            _ => None,
        }
    }
}
