//! Insertion-ordered arrays of owned values.

use crate::error::{DynonError, Result};
use crate::value::Value;

/// A growable array of owned values.
///
/// Indexing is 0-based and dense; removal shifts later elements down, so
/// there are never holes. Out-of-range access is an error carrying the
/// offending index and the current length, never a panic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// An empty array.
    pub fn new() -> Self {
        Array::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push `value` at the end, taking ownership.
    pub fn append(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(DynonError::IndexOutOfRange { index, len })
    }

    /// Bounds-checked element access, mutable.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(DynonError::IndexOutOfRange { index, len })
    }

    /// Remove the element at `index` and return it, transferring ownership
    /// to the caller. Later elements shift down one slot. Out of range
    /// fails without touching the array.
    pub fn extract(&mut self, index: usize) -> Result<Value> {
        if index >= self.items.len() {
            return Err(DynonError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove and drop the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.extract(index).map(|_| ())
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Iterate elements in order with mutable access.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array { items }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
