//! Insertion-ordered containers.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Key, Value};

/// A mapping from [`Key`] to [`Value`] that remembers insertion order.
///
/// Containers nest through [`Value::Map`]. Integer and string keys may be
/// mixed freely in one container, which is what lets a container act as a
/// list: [`Container::next_index`] yields the slot after the largest integer
/// key, and [`Container::push`] appends there.
///
/// Existence checks on a container treat [`Value::Null`] as "not set": a key
/// holding `Null` is reported as absent by [`Container::is_set`] and
/// [`Container::get_set`].
///
/// ```
/// # use keypath::{Container, Key, Value};
/// let mut list = Container::new();
/// list.push("first");
/// list.push("second");
/// list.insert("name", "todo");
///
/// assert_eq!(list.next_index(), Some(2));
/// assert_eq!(list.get(&Key::Index(1)), Some(&Value::from("second")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container {
    entries: IndexMap<Key, Value>,
}

impl Container {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of entries, including those holding `Null`
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the key is present, whatever it holds
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if the key is present and not `Null`
    pub fn is_set(&self, key: &Key) -> bool {
        self.get_set(key).is_some()
    }

    /// Gets the value stored under a key
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to the value stored under a key
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Gets the value under a key, hiding `Null`
    pub fn get_set(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key).filter(|value| !value.is_null())
    }

    /// Mutable counterpart of [`Container::get_set`]
    pub fn get_set_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key).filter(|value| !value.is_null())
    }

    /// Inserts a value, returning the previous one.
    ///
    /// Replacing an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Appends a value at [`Container::next_index`] and returns the key used.
    ///
    /// Returns `None` without inserting when no integer key is left above
    /// the largest one.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Index(self.next_index()?);
        self.entries.insert(key.clone(), value.into());
        Some(key)
    }

    /// Removes a key, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns the next free integer key: one past the largest integer key,
    /// or 0 when there is none.
    ///
    /// Returns `None` once `u64::MAX` is taken, since every slot above the
    /// largest key is exhausted.
    pub fn next_index(&self) -> Option<u64> {
        match self.entries.keys().filter_map(Key::as_index).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }

    /// Deep-merges `other` into this container.
    ///
    /// For each entry of `other`: when both sides hold a container under the
    /// key the two are merged recursively, otherwise the entry from `other`
    /// replaces the existing one (or is appended if the key is new).
    ///
    /// ```
    /// # use keypath::Container;
    /// let mut base = Container::new()
    ///     .with("a", Container::new().with("x", 1).with("y", 1))
    ///     .with("b", 1);
    /// let patch = Container::new()
    ///     .with("a", Container::new().with("y", 2))
    ///     .with("c", 3);
    ///
    /// base.merge(patch);
    /// assert_eq!(base.to_json_string(), r#"{"a":{"x":1,"y":2},"b":1,"c":3}"#);
    /// ```
    pub fn merge(&mut self, other: Container) {
        for (key, incoming) in other.entries {
            match self.entries.get_mut(&key) {
                Some(Value::Map(existing)) if incoming.is_map() => {
                    if let Value::Map(incoming) = incoming {
                        existing.merge(incoming);
                    }
                }
                Some(slot) => *slot = incoming,
                None => {
                    self.entries.insert(key, incoming);
                }
            }
        }
    }

    /// Returns the container under `key`, creating an empty one first if the
    /// key is missing or holds anything other than a container.
    pub(crate) fn child_map_mut(&mut self, key: Key) -> &mut Container {
        let slot = self.entries.entry(key).or_insert(Value::Null);
        if !slot.is_map() {
            if !slot.is_null() {
                tracing::debug!(
                    replaced = slot.type_name(),
                    "Replacing scalar with container to continue write"
                );
            }
            *slot = Value::Map(Container::new());
        }
        match slot {
            Value::Map(child) => child,
            _ => unreachable!(),
        }
    }

    /// Returns the value slot under `key`, inserting `Null` if missing
    pub(crate) fn slot_mut(&mut self, key: Key) -> &mut Value {
        self.entries.entry(key).or_insert(Value::Null)
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Converts to a compact JSON string. Keys are written in their string form.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self).to_string()
    }

    /// Builder method to insert a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
