//! Container keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key in a [`Container`](super::Container): a non-negative integer index
/// or a string name.
///
/// Path segments become keys by the canonical integer rule: a segment that is
/// the plain decimal form of a `u64` (no sign, no leading zeros) is an
/// [`Key::Index`], everything else is a [`Key::Name`].
///
/// ```
/// # use keypath::Key;
/// assert_eq!(Key::from("0"), Key::Index(0));
/// assert_eq!(Key::from("42"), Key::Index(42));
/// assert_eq!(Key::from("007"), Key::Name("007".to_string()));
/// assert_eq!(Key::from("-1"), Key::Name("-1".to_string()));
/// assert_eq!(Key::from("name"), Key::Name("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Key {
    Index(u64),
    Name(String),
}

impl Key {
    /// Converts a decoded path segment into a key.
    pub fn from_segment(segment: &str) -> Self {
        match parse_canonical_index(segment) {
            Some(index) => Key::Index(index),
            None => Key::Name(segment.to_string()),
        }
    }

    /// Returns the index if this is an integer key
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

fn parse_canonical_index(segment: &str) -> Option<u64> {
    let digits_only = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    let leading_zero = segment.len() > 1 && segment.starts_with('0');
    if !digits_only || leading_zero {
        return None;
    }
    // Out-of-range numbers stay names
    segment.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(segment: &str) -> Self {
        Key::from_segment(segment)
    }
}

impl From<String> for Key {
    fn from(segment: String) -> Self {
        match parse_canonical_index(&segment) {
            Some(index) => Key::Index(index),
            None => Key::Name(segment),
        }
    }
}

impl From<&String> for Key {
    fn from(segment: &String) -> Self {
        Key::from_segment(segment)
    }
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        Key::Index(index)
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(index.into())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as u64)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(index) => index.to_string(),
            Key::Name(name) => name,
        }
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match self {
            Key::Name(name) => name == other,
            Key::Index(_) => false,
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<u64> for Key {
    fn eq(&self, other: &u64) -> bool {
        self.as_index() == Some(*other)
    }
}
