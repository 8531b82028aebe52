//! Path tokenizing and key escaping.
//!
//! A path is a string of segments joined by the configured separator. An
//! escape marker placed directly before a separator makes that separator part
//! of the key instead of a boundary, and a doubled escape stands for one
//! literal escape marker.
//!
//! With the default tokens:
//!
//! | Path           | Segments              |
//! | -------------- | --------------------- |
//! | `a.b.c`        | `["a", "b", "c"]`     |
//! | `a.b\.c`       | `["a", "b.c"]`        |
//! | `a\\.b`        | `["a\", "b"]`         |
//! | `a..b`         | `["a", "", "b"]`      |
//! | (empty)        | `[""]`                |
//!
//! # Usage
//!
//! ```
//! use keypath::{PathConfig, path};
//!
//! let config = PathConfig::default();
//! assert_eq!(path::split_path(r"images.logo\.png", &config), vec!["images", "logo.png"]);
//!
//! let key = path::escape("logo.png", &config);
//! assert_eq!(key, r"logo\.png");
//! assert_eq!(path::unescape(&key, &config), "logo.png");
//! ```

use std::mem;

use crate::config::PathConfig;

/// Splits a path into its decoded segments.
///
/// The input is read once, left to right. At each position a doubled escape
/// is consumed before an escaped separator, so `\\.` is a literal escape
/// followed by a real boundary. An escape followed by anything else, or at
/// the very end of the path, is copied unchanged.
///
/// The result is never empty: an empty path yields a single empty segment.
pub fn split_path(path: &str, config: &PathConfig) -> Vec<String> {
    scan(path, config, true)
}

/// Returns `key` with every separator prefixed by the escape marker, so that
/// the key can be embedded in a path as a single segment.
pub fn escape(key: &str, config: &PathConfig) -> String {
    let separator = config.separator();
    if separator.is_empty() {
        return key.to_string();
    }
    key.replace(separator, &format!("{}{}", config.escape(), separator))
}

/// Reverses [`escape`]: escaped separators become bare separators and doubled
/// escape markers collapse to one.
pub fn unescape(key: &str, config: &PathConfig) -> String {
    scan(key, config, false).concat()
}

/// Escapes each segment and joins them with the separator.
///
/// For any path in which every escape marker precedes a separator,
/// `join_segments(&split_path(p))` reproduces `p`.
pub fn join_segments<S: AsRef<str>>(segments: &[S], config: &PathConfig) -> String {
    segments
        .iter()
        .map(|segment| escape(segment.as_ref(), config))
        .collect::<Vec<_>>()
        .join(config.separator())
}

/// Strips `escape` immediately followed by `token` from the front of `input`.
fn strip_escaped<'a>(input: &'a str, escape: &str, token: &str) -> Option<&'a str> {
    input.strip_prefix(escape)?.strip_prefix(token)
}

fn scan(input: &str, config: &PathConfig, split: bool) -> Vec<String> {
    let separator = config.separator();
    let escape = config.escape();
    // Empty tokens would match at every position without consuming input
    let escaping = !escape.is_empty() && !separator.is_empty();

    let mut segments = Vec::new();
    let mut current = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if escaping {
            if let Some(tail) = strip_escaped(rest, escape, escape) {
                current.push_str(escape);
                rest = tail;
                continue;
            }
            if let Some(tail) = strip_escaped(rest, escape, separator) {
                current.push_str(separator);
                rest = tail;
                continue;
            }
        }

        let boundary = if separator.is_empty() {
            None
        } else {
            rest.strip_prefix(separator)
        };
        if let Some(tail) = boundary {
            if split {
                segments.push(mem::take(&mut current));
            } else {
                current.push_str(separator);
            }
            rest = tail;
            continue;
        }

        current.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    segments.push(current);
    segments
}
