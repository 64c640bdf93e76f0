//! List-shaped accumulator with explicit tail access
//!
//! Folds that build up a list need to read the most recent value before
//! appending the next one. [`Series::last`] makes that read explicit and
//! fails with [`EmptyContainerError`] instead of wrapping around an index.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a value is read from an empty container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot read the last value of an empty series")]
pub struct EmptyContainerError;

/// Ordered accumulator container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series<T> {
    values: Vec<T>,
}

impl<T> Series<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Series holding a single seed value
    pub fn single(value: T) -> Self {
        Self { values: vec![value] }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Most recently appended value
    pub fn last(&self) -> Result<&T, EmptyContainerError> {
        self.values.last().ok_or(EmptyContainerError)
    }

    /// Consume the series and return it with `value` appended
    pub fn appended(mut self, value: T) -> Self {
        self.values.push(value);
        self
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
