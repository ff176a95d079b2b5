use crate::{
    error::{Result, SeqError, strict},
    num::Number,
};

/// Folds the sequence from left to right, seeding the accumulator with the
/// first element.
///
/// Returns [`SeqError::Empty`] if the sequence is empty.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::try_reduce(&[1, 2, 3, 4, 5], |a, b| a * b), Ok(120));
/// assert!(seq::try_reduce(&[] as &[i32], |a, b| a * b).is_err());
/// ```
pub fn try_reduce<T, F>(input: &[T], f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    input
        .iter()
        .cloned()
        .reduce(f)
        .ok_or(SeqError::empty("reduce"))
}

/// Strict form of [`try_reduce`].
///
/// # Panics
///
/// Panics if the sequence is empty.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::reduce(&[1, 2, 3, 4, 5], |a, b| a + b), 15);
/// ```
#[track_caller]
pub fn reduce<T, F>(input: &[T], f: F) -> T
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    strict(try_reduce(input, f))
}

// Each aggregate reports its own name in the error, so they go through
// `Iterator::reduce` directly rather than through `try_reduce`.
fn aggregate<T, F>(input: &[T], op: &'static str, f: F) -> Result<T>
where
    T: Number,
    F: FnMut(T, T) -> T,
{
    input
        .iter()
        .copied()
        .reduce(f)
        .ok_or(SeqError::empty(op))
}

// `NaN` is the only value not comparable with itself.
#[inline]
fn is_unordered<T: Number>(x: T) -> bool {
    x.partial_cmp(&x).is_none()
}

/// Adds up all elements. Returns [`SeqError::Empty`] for an empty sequence.
///
/// Integers wrap around on overflow.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::try_sum(&[200_u8, 100]), Ok(44));
/// ```
pub fn try_sum<T: Number>(input: &[T]) -> Result<T> {
    aggregate(input, "sum", T::wrapping_add)
}

/// Multiplies all elements. Returns [`SeqError::Empty`] for an empty sequence.
///
/// Integers wrap around on overflow.
pub fn try_product<T: Number>(input: &[T]) -> Result<T> {
    aggregate(input, "product", T::wrapping_mul)
}

/// Finds the smallest element. Returns [`SeqError::Empty`] for an empty sequence.
///
/// On ties the earliest element wins. A `NaN` is skipped wherever it
/// appears, so the result is `NaN` only if every element is.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::try_min(&[f64::NAN, 2.0, 1.0]), Ok(1.0));
/// assert_eq!(seq::try_min(&[2.0, f64::NAN, 1.0]), Ok(1.0));
/// ```
pub fn try_min<T: Number>(input: &[T]) -> Result<T> {
    aggregate(input, "min", |min, x| {
        if x < min || is_unordered(min) { x } else { min }
    })
}

/// Finds the largest element. Returns [`SeqError::Empty`] for an empty sequence.
///
/// On ties the earliest element wins. A `NaN` is skipped like in [`try_min`].
pub fn try_max<T: Number>(input: &[T]) -> Result<T> {
    aggregate(input, "max", |max, x| {
        if x > max || is_unordered(max) { x } else { max }
    })
}

/// Strict form of [`try_sum`].
///
/// # Panics
///
/// Panics if the sequence is empty.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::sum(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(seq::sum(&[0.5, 0.25]), 0.75);
/// ```
#[track_caller]
pub fn sum<T: Number>(input: &[T]) -> T {
    strict(try_sum(input))
}

/// Strict form of [`try_product`].
///
/// # Panics
///
/// Panics if the sequence is empty.
#[track_caller]
pub fn product<T: Number>(input: &[T]) -> T {
    strict(try_product(input))
}

/// Strict form of [`try_min`].
///
/// # Panics
///
/// Panics if the sequence is empty.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::min(&[5, 2, 3, 4, 1]), 1);
/// ```
#[track_caller]
pub fn min<T: Number>(input: &[T]) -> T {
    strict(try_min(input))
}

/// Strict form of [`try_max`].
///
/// # Panics
///
/// Panics if the sequence is empty.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::max(&[5, 2, 3, 4, 1]), 5);
/// ```
#[track_caller]
pub fn max<T: Number>(input: &[T]) -> T {
    strict(try_max(input))
}
