use std::fmt::Display;

use itertools::Itertools;

/// Formats every element with [`Display`] and joins them with `sep`.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::join(&[1, 2, 3], "-"), "1-2-3");
/// assert_eq!(seq::join(&[] as &[i32], "-"), "");
/// ```
pub fn join<T: Display>(input: &[T], sep: &str) -> String {
    input.iter().join(sep)
}
