//! Insertion-ordered string-keyed maps.
//!
//! A [`Map`] keeps its entries as `Vec<(String, Value)>` rather than a hash
//! or tree map: iteration and serialization follow insertion order exactly,
//! and documents stay small enough that linear key scans beat the constant
//! factors of anything fancier.
//!
//! Lookup comes in three named flavors so call sites say what they mean:
//! [`Map::find`] (exact key), [`Map::find_case`] (ASCII case-insensitive
//! key), and [`Map::find_path`] (dotted path descending through nested
//! maps, case-insensitive per segment).
//!
//! ```rust
//! use dynon_core::{Map, Value};
//!
//! let mut m = Map::new();
//! m.append("Alice", 8.25);
//! assert!(m.find("alice").is_none());
//! assert!(m.find_case("alice").is_some());
//!
//! let moved: Value = m.extract("Alice").unwrap();
//! assert_eq!(moved.to_double().unwrap(), 8.25);
//! assert!(m.is_empty());
//! ```

use crate::value::Value;

/// A string-keyed map of owned values, in insertion order.
///
/// Keys are unique by exact match; [`Map::append`] with an existing key
/// replaces the value in place, keeping the entry's original position. Keys
/// differing only by case are distinct entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// An empty map.
    pub fn new() -> Self {
        Map::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `value` under `key`, taking ownership. If the exact key is
    /// already present the old value is dropped and the new one takes its
    /// slot, so the entry keeps its original position in iteration order.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Exact-key lookup.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Exact-key lookup, mutable.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// ASCII case-insensitive whole-key lookup. When several keys differ
    /// only by case, the earliest-inserted one wins.
    pub fn find_case(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Dotted-path lookup: `"a.b.c"` resolves `a` in this map, then `b`
    /// inside that map, and so on. Segments match case-insensitively.
    /// Returns `None` as soon as a segment is missing or a non-terminal
    /// segment is not itself a map. The empty path names no segments and
    /// resolves to `None`, even when the map holds an empty key.
    pub fn find_path(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        let mut segments = path.split('.');
        let mut node = self.find_case(segments.next()?)?;
        for segment in segments {
            node = node.as_map()?.find_case(segment)?;
        }
        Some(node)
    }

    /// Remove the entry for `key` (exact match) and return its value,
    /// transferring ownership to the caller. `None` leaves the map
    /// untouched.
    pub fn extract(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Remove and drop the entry for `key` (exact match). Returns whether
    /// the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate entries in insertion order with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }
}

/// Borrowing iterator over `(key, value)` pairs in insertion order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Like [`Iter`] but with mutable access to the values.
pub struct IterMut<'a> {
    inner: std::slice::IterMut<'a, (String, Value)>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Map {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
