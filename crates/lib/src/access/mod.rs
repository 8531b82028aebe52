//! Path-based access to nested containers.
//!
//! [`PathAccessor`] is the main entry point of the crate. It reads, writes,
//! tests and removes values in a [`Container`] addressed by a path string such
//! as `"user.profile.name"`, using the tokens of its [`PathConfig`].
//!
//! # Usage
//!
//! ```
//! use keypath::{Container, PathAccessor, Value};
//!
//! let accessor = PathAccessor::new();
//! let mut config = Container::new();
//!
//! accessor.set(&mut config, "server.port", 8080)?;
//! accessor.set(&mut config, r"assets.logo\.png", "/static/logo.png")?;
//! accessor.set(&mut config, "server.aliases.<i>", "www")?;
//! accessor.set(&mut config, "server.aliases.<i>", "api")?;
//!
//! assert_eq!(accessor.get(&config, "server.port")?, &Value::Int(8080));
//! assert_eq!(accessor.get_as::<&str>(&config, "server.aliases.1"), Some("api"));
//! assert!(accessor.has(&config, r"assets.logo\.png"));
//!
//! accessor.remove(&mut config, "server.aliases")?;
//! assert!(!accessor.has(&config, "server.aliases.0"));
//! # Ok::<(), keypath::Error>(())
//! ```
//!
//! # Write semantics
//!
//! - Missing intermediate keys are created as empty containers.
//! - A segment equal to the index identifier (`<i>` by default) is replaced
//!   by the next free integer key of the container it is looked up in.
//! - Writing a container onto a container deep-merges the two.
//! - Writing a scalar onto a container does nothing; remove the path first
//!   to replace a container with a scalar. Intermediate containers created
//!   on the way down are kept.
//! - Writing onto a scalar or an unset key replaces it.

use crate::{
    config::PathConfig,
    path,
    value::{Container, Key, Value},
};

mod errors;

pub use errors::AccessError;

/// Reads and writes values in nested containers by path.
///
/// The accessor holds only its [`PathConfig`]; the containers it operates on
/// are borrowed for the duration of each call. Configuration changes take
/// effect on the next call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAccessor {
    config: PathConfig,
}

impl PathAccessor {
    /// Creates an accessor with the default tokens
    pub fn new() -> Self {
        Self::with_config(PathConfig::default())
    }

    /// Creates an accessor with the given tokens, unvalidated
    pub fn with_config(config: PathConfig) -> Self {
        Self { config }
    }

    /// Creates an accessor after checking the tokens with [`PathConfig::validate`]
    pub fn try_new(config: PathConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PathConfig {
        &mut self.config
    }

    pub fn separator(&self) -> &str {
        self.config.separator()
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.config.set_separator(separator);
    }

    /// Returns the escape marker. Named to stay clear of [`PathAccessor::escape`].
    pub fn escape_token(&self) -> &str {
        self.config.escape()
    }

    pub fn set_escape(&mut self, escape: impl Into<String>) {
        self.config.set_escape(escape);
    }

    pub fn index_identifier(&self) -> &str {
        self.config.index_identifier()
    }

    pub fn set_index_identifier(&mut self, identifier: impl Into<String>) {
        self.config.set_index_identifier(identifier);
    }

    /// Escapes every separator in `key` so it can be used as one segment.
    pub fn escape(&self, key: &str) -> String {
        path::escape(key, &self.config)
    }

    /// Reverses [`PathAccessor::escape`].
    pub fn unescape(&self, key: &str) -> String {
        path::unescape(key, &self.config)
    }

    /// Splits a path into decoded segments. See [`path::split_path`].
    pub fn split_path(&self, path: &str) -> Vec<String> {
        path::split_path(path, &self.config)
    }

    /// Escapes and joins segments into a path. See [`path::join_segments`].
    pub fn join_segments<S: AsRef<str>>(&self, segments: &[S]) -> String {
        path::join_segments(segments, &self.config)
    }

    /// Gets the value at `path`.
    ///
    /// Every segment must resolve to a set (non-`Null`) key at its depth.
    ///
    /// # Errors
    /// [`AccessError::KeyNotFound`] naming the first segment that does not
    /// resolve. A segment below a scalar never resolves.
    pub fn get<'a>(&self, container: &'a Container, path: &str) -> crate::Result<&'a Value> {
        let segments = self.split_path(path);
        let (last, parents) = split_last(&segments, path)?;
        let parent = descend(container, parents, last)?;
        parent
            .get_set(&Key::from_segment(last))
            .ok_or_else(|| AccessError::key_not_found(last).into())
    }

    /// Gets a mutable reference to the value at `path`, with the same lookup
    /// rules as [`PathAccessor::get`].
    pub fn get_mut<'a>(
        &self,
        container: &'a mut Container,
        path: &str,
    ) -> crate::Result<&'a mut Value> {
        let segments = self.split_path(path);
        let (last, parents) = split_last(&segments, path)?;
        let parent = descend_mut(container, parents, last)?;
        parent
            .get_set_mut(&Key::from_segment(last))
            .ok_or_else(|| AccessError::key_not_found(last).into())
    }

    /// Gets the value at `path` converted with `TryFrom`.
    ///
    /// Returns `None` if the path does not resolve or the conversion fails.
    pub fn get_as<'a, T>(&self, container: &'a Container, path: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = AccessError>,
    {
        let value = self.get(container, path).ok()?;
        T::try_from(value).ok()
    }

    /// Returns true if [`PathAccessor::get`] would succeed for `path`.
    pub fn has(&self, container: &Container, path: &str) -> bool {
        self.get(container, path).is_ok()
    }

    /// Writes `value` at `path`, creating intermediate containers as needed.
    ///
    /// See the [module documentation](crate::access) for the merge rules applied to
    /// the final segment.
    ///
    /// # Errors
    /// [`AccessError::InvalidPath`] if `path` is empty, or if the index
    /// identifier meets a container whose largest key is `u64::MAX`. Nothing
    /// is written in either case.
    pub fn set(
        &self,
        container: &mut Container,
        path: &str,
        value: impl Into<Value>,
    ) -> crate::Result<()> {
        if path.is_empty() {
            return Err(invalid_path(path, NO_SEGMENTS).into());
        }

        let segments = self.split_path(path);
        let (last, parents) = split_last(&segments, path)?;
        tracing::trace!(path, depth = segments.len(), "Writing value");

        let mut current = container;
        for segment in parents {
            let key = self.write_key(current, segment, path)?;
            current = current.child_map_mut(key);
        }

        let key = self.write_key(current, last, path)?;
        write_merge(current.slot_mut(key), value.into(), path);
        Ok(())
    }

    /// Removes the value at `path` from its parent and returns it.
    ///
    /// Removing a container removes everything below it.
    ///
    /// # Errors
    /// [`AccessError::KeyNotFound`] under the same rules as [`PathAccessor::get`].
    pub fn remove(&self, container: &mut Container, path: &str) -> crate::Result<Value> {
        let segments = self.split_path(path);
        let (last, parents) = split_last(&segments, path)?;
        let parent = descend_mut(container, parents, last)?;

        let key = Key::from_segment(last);
        if !parent.is_set(&key) {
            return Err(AccessError::key_not_found(last).into());
        }
        tracing::debug!(path, "Removing value");
        parent
            .remove(&key)
            .ok_or_else(|| AccessError::key_not_found(last).into())
    }

    /// Maps a segment to the key it addresses on write.
    ///
    /// The index identifier fails once the container already holds
    /// `u64::MAX`, as there is no fresh slot to append to.
    fn write_key(
        &self,
        container: &Container,
        segment: &str,
        path: &str,
    ) -> Result<Key, AccessError> {
        if segment != self.config.index_identifier() {
            return Ok(Key::from_segment(segment));
        }
        let index = container
            .next_index()
            .ok_or_else(|| invalid_path(path, "no free integer key left to append to"))?;
        tracing::trace!(index, "Allocated next free index");
        Ok(Key::Index(index))
    }
}

const NO_SEGMENTS: &str = "path does not contain any segments";

fn invalid_path(path: &str, reason: &str) -> AccessError {
    AccessError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn split_last<'s>(
    segments: &'s [String],
    path: &str,
) -> Result<(&'s String, &'s [String]), AccessError> {
    segments.split_last().ok_or_else(|| invalid_path(path, NO_SEGMENTS))
}

/// Walks `parents` and returns the container they lead to.
///
/// A scalar has no keys, so when one is met the segment after it is the one
/// reported missing.
fn descend<'a>(
    root: &'a Container,
    parents: &[String],
    last: &str,
) -> Result<&'a Container, AccessError> {
    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        current = match current.get_set(&Key::from_segment(segment)) {
            Some(Value::Map(child)) => child,
            Some(_) => return Err(AccessError::key_not_found(next_segment(parents, depth, last))),
            None => return Err(AccessError::key_not_found(segment.as_str())),
        };
    }
    Ok(current)
}

fn descend_mut<'a>(
    root: &'a mut Container,
    parents: &[String],
    last: &str,
) -> Result<&'a mut Container, AccessError> {
    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        current = match current.get_set_mut(&Key::from_segment(segment)) {
            Some(Value::Map(child)) => child,
            Some(_) => return Err(AccessError::key_not_found(next_segment(parents, depth, last))),
            None => return Err(AccessError::key_not_found(segment.as_str())),
        };
    }
    Ok(current)
}

fn next_segment<'s>(parents: &'s [String], depth: usize, last: &'s str) -> &'s str {
    parents.get(depth + 1).map_or(last, String::as_str)
}

/// Applies an incoming value to the slot addressed by the final segment.
fn write_merge(slot: &mut Value, value: Value, path: &str) {
    match slot {
        Value::Map(existing) => match value {
            Value::Map(incoming) => existing.merge(incoming),
            discarded => tracing::debug!(
                path,
                discarded = discarded.type_name(),
                "Ignoring scalar write onto container"
            ),
        },
        _ => *slot = value,
    }
}
