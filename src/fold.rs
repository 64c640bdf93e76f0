//! Left-fold iteration with an accumulator
//!
//! The combining function receives each element in order together with the
//! accumulator returned by the previous call (or the seed, for the first
//! element). Iteration is strictly sequential: every step depends on the one
//! before it, so nothing here is parallelised.

use crate::sequence::Sequence;
use std::convert::Infallible;
use thiserror::Error;
use tracing::{debug, trace};

/// A combining function failed for the element at `index`
///
/// The partially built accumulator is dropped when this is returned, so no
/// state past index `index - 1` escapes the fold.
#[derive(Debug, Error)]
#[error("combining function failed at index {index}: {source}")]
pub struct CombinerError<E> {
    pub index: usize,
    #[source]
    pub source: E,
}

impl<E> CombinerError<E> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn into_source(self) -> E {
        self.source
    }
}

/// Fold `elements` into `initial` with a fallible combining function
///
/// Stops at the first failure and reports the zero-based index of the element
/// that caused it. An empty input returns `initial` untouched.
pub fn try_fold_elements<I, A, F, E>(
    elements: I,
    initial: A,
    mut combine: F,
) -> Result<A, CombinerError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item, A) -> Result<A, E>,
{
    let mut accumulator = initial;
    for (index, element) in elements.into_iter().enumerate() {
        trace!(index, "Applying combining function");
        accumulator = combine(element, accumulator).map_err(|source| {
            debug!(index, "Combining function failed, aborting fold");
            CombinerError { index, source }
        })?;
    }
    Ok(accumulator)
}

/// Fold a sequence with a fallible combining function
pub fn try_iterate<E, A, F, Er>(
    sequence: &Sequence<E>,
    initial: A,
    combine: F,
) -> Result<A, CombinerError<Er>>
where
    F: FnMut(&E, A) -> Result<A, Er>,
{
    debug!(len = sequence.len(), "Iterating over sequence");
    try_fold_elements(sequence, initial, combine)
}

/// Fold a sequence with a combining function that cannot fail
pub fn iterate<E, A, F>(sequence: &Sequence<E>, initial: A, mut combine: F) -> A
where
    F: FnMut(&E, A) -> A,
{
    match try_iterate(sequence, initial, |element, acc| {
        Ok::<A, Infallible>(combine(element, acc))
    }) {
        Ok(accumulator) => accumulator,
        Err(err) => match err.source {},
    }
}

impl<E> Sequence<E> {
    /// Method form of [`iterate`]
    pub fn iterate<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(&E, A) -> A,
    {
        iterate(self, initial, combine)
    }

    /// Method form of [`try_iterate`]
    pub fn try_iterate<A, F, Er>(&self, initial: A, combine: F) -> Result<A, CombinerError<Er>>
    where
        F: FnMut(&E, A) -> Result<A, Er>,
    {
        try_iterate(self, initial, combine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{EmptyContainerError, Series};

    #[test]
    fn test_empty_sequence_returns_initial() {
        let seq: Sequence<i32> = Sequence::empty();
        let mut calls = 0;
        let result = iterate(&seq, 42, |_, acc| {
            calls += 1;
            acc + 1
        });
        assert_eq!(result, 42);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_accumulator_type_differs_from_element_type() {
        let seq = Sequence::new(vec![1u8, 2, 3]);
        let joined = seq.iterate(String::new(), |e, mut acc| {
            acc.push_str(&e.to_string());
            acc
        });
        assert_eq!(joined, "123");
    }

    #[test]
    fn test_steps_run_left_to_right() {
        let seq = Sequence::new(vec!["a", "b", "c"]);
        let order = seq.iterate(Vec::new(), |e, mut acc| {
            acc.push(*e);
            acc
        });
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_failure_reports_index_and_stops() {
        let seq = Sequence::new(vec![1, 2, 0, 4]);
        let mut seen = Vec::new();
        let result = try_iterate(&seq, 100, |e, acc| {
            seen.push(*e);
            if *e == 0 {
                Err("division by zero")
            } else {
                Ok(acc / e)
            }
        });

        let err = result.unwrap_err();
        assert_eq!(err.index(), 2);
        assert_eq!(err.into_source(), "division by zero");
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_empty_accumulator_surfaces_through_combiner_error() {
        let seq = Sequence::new(vec![1.0]);
        let result = seq.try_iterate(
            Series::<f64>::default(),
            |_, acc| -> Result<Series<f64>, EmptyContainerError> {
                let last = *acc.last()?;
                Ok(acc.appended(last / 2.0))
            },
        );

        let err = result.unwrap_err();
        assert_eq!(err.index, 0);
        assert_eq!(err.source, EmptyContainerError);
        assert_eq!(
            err.to_string(),
            "combining function failed at index 0: cannot read the last value of an empty series"
        );
    }

    #[test]
    fn test_fold_elements_accepts_any_iterator() {
        let total = try_fold_elements(1..=4, 0, |e, acc| Ok::<_, Infallible>(acc + e)).unwrap();
        assert_eq!(total, 10);
    }
}
