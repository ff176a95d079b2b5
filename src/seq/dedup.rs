use std::hash::Hash;

use itertools::Itertools;

/// Removes duplicates, keeping the first occurrence of each value in its
/// original position.
///
/// Only [`PartialEq`] is needed, so every element is compared against the
/// values kept so far. That is quadratic in the worst case; prefer
/// [`unique_hashed`] for large inputs of hashable values.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::unique(&[1, 2, 3, 1, 2, 4]), [1, 2, 3, 4]);
/// assert_eq!(seq::unique(&[0.5, 0.5, 1.5]), [0.5, 1.5]);
/// ```
pub fn unique<T>(input: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Same as [`unique`], but in linear time for hashable values.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::unique_hashed(&["b", "a", "b", "c", "a"]), ["b", "a", "c"]);
/// ```
pub fn unique_hashed<T>(input: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    input.iter().unique().cloned().collect()
}

/// Keeps the first element for each distinct key.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts = seq::unique_by(&words, |w| w.chars().next());
///
/// assert_eq!(firsts, ["apple", "banana", "cherry"]);
/// ```
pub fn unique_by<T, K, F>(input: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    input
        .iter()
        .unique_by(|&item| key(item))
        .cloned()
        .collect()
}

/// Concatenates `a` and `b`. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::union(&[1, 2], &[2, 3]), [1, 2, 2, 3]);
/// ```
pub fn union<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    [a, b].concat()
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn unique_has_no_duplicates(
            nums in propvec(0_u8..8, ..=32),
        ) {
            let out = unique(&nums);

            for (i, x) in out.iter().enumerate() {
                prop_assert!(!out[i + 1..].contains(x));
            }
            prop_assert!(nums.iter().all(|x| out.contains(x)));
        }

        #[test]
        fn unique_preserves_first_seen_order(
            nums in propvec(0_u8..8, ..=32),
        ) {
            let out = unique(&nums);
            let first_positions: Vec<_> = out
                .iter()
                .map(|x| nums.iter().position(|y| y == x))
                .collect();

            prop_assert!(first_positions.is_sorted());
        }

        #[test]
        fn unique_is_idempotent(
            nums in propvec(0_u8..8, ..=32),
        ) {
            let once = unique(&nums);
            prop_assert_eq!(unique(&once), once.clone());
            prop_assert_eq!(unique_hashed(&nums), once);
        }
    }
}
