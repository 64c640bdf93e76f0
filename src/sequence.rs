//! Immutable ordered sequences
//!
//! A [`Sequence`] is the input side of a fold: a finite, ordered collection of
//! elements that is never mutated in place. Slicing and generation return new
//! sequences; clones share the same backing storage.

use std::ops::Index;
use std::sync::Arc;
use thiserror::Error;

/// Upper bound on the length of a generated numeric range
pub const MAX_GENERATED_LEN: usize = 10_000_000;

/// Tolerance applied when counting range elements so that `0.1`-style steps
/// still reach an end that is an exact multiple on paper.
const RANGE_EPSILON: f64 = 1e-9;

/// Errors raised while generating a numeric sequence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    #[error("sequence bounds must be finite (start {start}, end {end})")]
    NonFinite { start: f64, end: f64 },

    #[error("sequence step must be finite and non-zero, got {step}")]
    InvalidStep { step: f64 },

    #[error("sequence end {end} cannot be reached from {start} with step {step}")]
    UnreachableEnd { start: f64, end: f64, step: f64 },

    #[error("sequence of {len} elements exceeds the limit of {max}", max = MAX_GENERATED_LEN)]
    TooLong { len: f64 },
}

/// Ordered, finite, immutable collection of elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<E> {
    elements: Arc<[E]>,
}

impl<E> Sequence<E> {
    /// Create a sequence that takes ownership of `elements`
    pub fn new(elements: Vec<E>) -> Self {
        Self {
            elements: Arc::from(elements),
        }
    }

    /// Create an empty sequence
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    pub fn first(&self) -> Option<&E> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&E> {
        self.elements.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }
}

impl<E: Clone> Sequence<E> {
    /// Return the elements in `start..end` as a new sequence
    ///
    /// Both bounds are clamped to the sequence length. A range with
    /// `start >= end` yields an empty sequence rather than an error.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::new(self.elements[start..end].to_vec())
    }

    /// Everything after the first `count` elements
    pub fn skip(&self, count: usize) -> Self {
        self.slice(count, self.len())
    }

    pub fn to_vec(&self) -> Vec<E> {
        self.elements.to_vec()
    }
}

impl Sequence<f64> {
    /// Generate `start, start + step, ...` up to and including `end`
    ///
    /// `range(0.0, 10.0, 1.0)` has eleven elements. The end is included only
    /// when it lies on the step grid; otherwise generation stops at the last
    /// value before it.
    pub fn range(start: f64, end: f64, step: f64) -> Result<Self, SequenceError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SequenceError::NonFinite { start, end });
        }
        if !step.is_finite() || step == 0.0 {
            return Err(SequenceError::InvalidStep { step });
        }

        let span = end - start;
        if span != 0.0 && span.signum() != step.signum() {
            return Err(SequenceError::UnreachableEnd { start, end, step });
        }

        let len = (span / step + RANGE_EPSILON).floor() + 1.0;
        if len > MAX_GENERATED_LEN as f64 {
            return Err(SequenceError::TooLong { len });
        }

        Ok(Self::with_count(start, step, len as usize))
    }

    /// Generate exactly `count` elements starting at `start`
    pub fn with_count(start: f64, step: f64, count: usize) -> Self {
        (0..count).map(|i| start + step * i as f64).collect()
    }
}

impl<E> Default for Sequence<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<Vec<E>> for Sequence<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::new(elements)
    }
}

impl<E> FromIterator<E> for Sequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for &'a Sequence<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> Index<usize> for Sequence<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.elements[index]
    }
}
