use std::cmp::Ordering;

use rand::RngExt;

/// Returns a sorted copy of the sequence, ascending according to `less`.
///
/// `less(a, b)` must return `true` iff `a` is strictly before `b`
/// (a strict weak ordering). The sort is stable: elements that compare
/// equivalent keep their relative order.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// let nums = [5, 4, 3, 2, 1];
/// assert_eq!(seq::sort(&nums, |a, b| a < b), [1, 2, 3, 4, 5]);
/// assert_eq!(nums, [5, 4, 3, 2, 1]);
/// ```
pub fn sort<T, F>(input: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort_by(input, |a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Returns a copy of the sequence stably sorted with a comparison function.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// let words = ["pear", "fig", "banana"];
/// assert_eq!(
///     seq::sort_by(&words, |a, b| a.len().cmp(&b.len())),
///     ["fig", "pear", "banana"],
/// );
/// ```
pub fn sort_by<T, F>(input: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = input.to_vec();
    out.sort_by(compare);
    out
}

/// Returns a uniformly random permutation of the sequence, drawn from the
/// thread-local generator.
///
/// Use [`shuffle_with`] to supply the generator, e.g. a seeded one for
/// reproducible results.
pub fn shuffle<T: Clone>(input: &[T]) -> Vec<T> {
    shuffle_with(input, &mut rand::rng())
}

/// Returns a uniformly random permutation of the sequence, drawn from `rng`.
///
/// This is a Fisher–Yates shuffle on a copy. It is not meant for
/// cryptographic use.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use seqops::seq;
///
/// let nums = [1, 2, 3, 4, 5];
/// let a = seq::shuffle_with(&nums, &mut StdRng::seed_from_u64(7));
/// let b = seq::shuffle_with(&nums, &mut StdRng::seed_from_u64(7));
///
/// // Same seed, same permutation.
/// assert_eq!(a, b);
/// assert_eq!(seq::sort(&a, |x, y| x < y), nums);
/// ```
pub fn shuffle_with<T, R>(input: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RngExt,
{
    let mut out = input.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::test_utils::is_permutation;

    use super::*;

    proptest! {
        #[test]
        fn sort_orders_a_permutation(
            nums in propvec(any::<i16>(), ..=32),
        ) {
            let out = sort(&nums, |a, b| a < b);

            prop_assert!(is_permutation(&out, &nums));
            prop_assert!(out.is_sorted());
            prop_assert_eq!(sort(&out, |a, b| a < b), out);
        }

        #[test]
        fn shuffle_is_permutation(
            nums in propvec(any::<i16>(), ..=32),
            seed in any::<u64>(),
        ) {
            let out = shuffle_with(&nums, &mut StdRng::seed_from_u64(seed));
            prop_assert!(is_permutation(&out, &nums));
        }
    }
}
