//! Property-based tests for the fold primitive

#[cfg(test)]
mod tests {
    use crate::fold::{iterate, try_iterate};
    use crate::sequence::Sequence;
    use proptest::prelude::*;

    // Property test: identity combine leaves the seed untouched
    proptest! {
        #[test]
        fn test_identity_combine_returns_seed(
            elements in prop::collection::vec(any::<i64>(), 0..64),
            seed in any::<i64>(),
        ) {
            let seq = Sequence::new(elements);
            prop_assert_eq!(iterate(&seq, seed, |_, acc| acc), seed);
        }
    }

    // Property test: combine runs once per element, in index order
    proptest! {
        #[test]
        fn test_combine_called_once_per_element_in_order(
            elements in prop::collection::vec(any::<u16>(), 1..64),
        ) {
            let seq = Sequence::new(elements.clone());
            let mut calls = 0usize;
            let visited = iterate(&seq, Vec::new(), |e, mut acc| {
                calls += 1;
                acc.push(*e);
                acc
            });

            prop_assert_eq!(calls, elements.len());
            prop_assert_eq!(visited, elements);
        }
    }

    // Property test: an empty sequence never calls combine
    proptest! {
        #[test]
        fn test_empty_sequence_is_noop(seed in ".*") {
            let seq: Sequence<u8> = Sequence::empty();
            let result = try_iterate(&seq, seed.clone(), |_, _| Err::<String, _>("unreachable"));
            prop_assert_eq!(result.unwrap(), seed);
        }
    }

    // Property test: pure combines are deterministic
    proptest! {
        #[test]
        fn test_fold_is_deterministic(
            elements in prop::collection::vec(-1000i64..1000, 0..64),
            seed in -1000i64..1000,
        ) {
            let seq = Sequence::new(elements);
            let combine = |e: &i64, acc: i64| acc.wrapping_mul(31).wrapping_add(*e);

            prop_assert_eq!(iterate(&seq, seed, combine), iterate(&seq, seed, combine));
        }
    }

    // Property test: failure at index k is reported as k and stops the fold
    proptest! {
        #[test]
        fn test_failure_index_is_reported(
            len in 1usize..64,
            fail_at in 0usize..64,
        ) {
            let fail_at = fail_at % len;
            let seq: Sequence<usize> = (0..len).collect();
            let mut calls = 0usize;

            let result = try_iterate(&seq, 0usize, |e, acc| {
                calls += 1;
                if *e == fail_at { Err("rejected") } else { Ok(acc + 1) }
            });

            let err = result.unwrap_err();
            prop_assert_eq!(err.index, fail_at);
            prop_assert_eq!(calls, fail_at + 1);
        }
    }
}
