//! Wire encoding for STS request parameters.
//!
//! The STS API does not accept array syntax for ordered lists. Every list
//! (recipients, names, tags) travels as a map keyed by its zero-based index,
//! and nested structures are flattened into bracketed form keys:
//!
//! ```text
//! message[to_email][0]=dbalatero@gmail.com
//! tags[0]=fun
//! tags[1]=message
//! ```

use std::collections::BTreeMap;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered list of recipient values (email addresses or display names).
///
/// Built from either a single string or a sequence of strings, so callers
/// with one recipient never need to wrap it in a list. An empty single string
/// gives an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Creates an empty recipient list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a value.
    #[must_use]
    pub fn with(mut self, value: impl Into<String>) -> Self {
        self.0.push(value.into());
        self
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::new()
        } else {
            Self(vec![value])
        }
    }
}

impl From<Vec<String>> for Recipients {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[&str]> for Recipients {
    fn from(values: &[&str]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(values: [&str; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Recipients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Index-keyed map standing in for an ordered list on the wire.
///
/// Keys are contiguous and start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireMap(BTreeMap<usize, String>);

impl WireMap {
    /// Encodes a scalar or list into its indexed form.
    ///
    /// A single string becomes a one-element map. No validation happens
    /// here: an empty list encodes to an empty map.
    #[must_use]
    pub fn encode(value: impl Into<Recipients>) -> Self {
        Self(value.into().0.into_iter().enumerate().collect())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    /// Iterates entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(i, v)| (*i, v.as_str()))
    }

    /// Appends one `key[i]=value` pair per entry under `path`.
    pub(crate) fn append_to(&self, form: &mut Form, path: &[&str]) {
        for (index, value) in self.iter() {
            let index = index.to_string();
            let mut key = path.to_vec();
            key.push(&index);
            form.push(&key, value);
        }
    }
}

impl Index<usize> for WireMap {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[&index]
    }
}

impl Serialize for WireMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, value) in &self.0 {
            map.serialize_entry(&index.to_string(), value)?;
        }
        map.end()
    }
}

/// Flattened `application/x-www-form-urlencoded` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a value under a nested key path.
    ///
    /// `["message", "to_email", "0"]` becomes `message[to_email][0]`.
    pub fn push(&mut self, path: &[&str], value: impl Into<String>) {
        self.pairs.push((bracket_key(path), value.into()));
    }

    /// Returns the first value stored under a flattened key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if any pair uses the flattened key or nests below it.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let nested = format!("{key}[");
        self.pairs
            .iter()
            .any(|(k, _)| k == key || k.starts_with(&nested))
    }

    /// Returns the pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the form has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn bracket_key(path: &[&str]) -> String {
    let mut segments = path.iter();
    let mut key = segments.next().map(ToString::to_string).unwrap_or_default();
    for segment in segments {
        key.push('[');
        key.push_str(segment);
        key.push(']');
    }
    key
}
