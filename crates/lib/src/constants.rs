//! Constants used throughout the keypath library.
//!
//! This module provides central definitions for the default path tokens.

/// Default separator between path segments: `a.b.c`.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Default escape marker, used to embed a separator in a key: `images.logo\.png`.
pub const DEFAULT_ESCAPE: &str = "\\";

/// Default index identifier: `list.<i>` appends at the next free integer key of `list`.
pub const DEFAULT_INDEX_IDENTIFIER: &str = "<i>";
