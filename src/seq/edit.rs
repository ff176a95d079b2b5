use crate::error::{Result, SeqError, strict};

/// Returns a copy of the sequence with positions `start..end` set to `value`.
///
/// Returns [`SeqError::RangeOutOfBounds`] unless `start <= end <= input.len()`.
/// An empty range yields an unchanged copy.
///
/// # Examples
///
/// ```
/// use seqops::{SeqError, seq};
///
/// assert_eq!(seq::try_fill(&[1, 2, 3, 4, 5], 0, 3, 10), Ok(vec![10, 10, 10, 4, 5]));
/// assert_eq!(
///     seq::try_fill(&[1, 2], 1, 4, 0),
///     Err(SeqError::RangeOutOfBounds { start: 1, end: 4, len: 2 }),
/// );
/// ```
pub fn try_fill<T: Clone>(input: &[T], start: usize, end: usize, value: T) -> Result<Vec<T>> {
    if start > end || end > input.len() {
        return Err(SeqError::RangeOutOfBounds {
            start,
            end,
            len: input.len(),
        });
    }

    let mut out = input.to_vec();
    out[start..end].fill(value);
    Ok(out)
}

/// Strict form of [`try_fill`].
///
/// # Panics
///
/// Panics if the range is not within the sequence.
#[track_caller]
pub fn fill<T: Clone>(input: &[T], start: usize, end: usize, value: T) -> Vec<T> {
    strict(try_fill(input, start, end, value))
}

/// Splits off the last element, returning it with the rest of the sequence.
///
/// Returns [`SeqError::Empty`] for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::try_pop(&[1, 2, 3]), Ok((3, vec![1, 2])));
/// assert!(seq::try_pop(&[] as &[i32]).is_err());
/// ```
pub fn try_pop<T: Clone>(input: &[T]) -> Result<(T, Vec<T>)> {
    let (last, rest) = input.split_last().ok_or(SeqError::empty("pop"))?;
    Ok((last.clone(), rest.to_vec()))
}

/// Splits off the first element, returning it with the rest of the sequence.
///
/// Returns [`SeqError::Empty`] for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::try_shift(&[1, 2, 3]), Ok((1, vec![2, 3])));
/// ```
pub fn try_shift<T: Clone>(input: &[T]) -> Result<(T, Vec<T>)> {
    let (first, rest) = input.split_first().ok_or(SeqError::empty("shift"))?;
    Ok((first.clone(), rest.to_vec()))
}

/// Strict form of [`try_pop`].
///
/// # Panics
///
/// Panics if the sequence is empty.
#[track_caller]
pub fn pop<T: Clone>(input: &[T]) -> (T, Vec<T>) {
    strict(try_pop(input))
}

/// Strict form of [`try_shift`].
///
/// # Panics
///
/// Panics if the sequence is empty.
#[track_caller]
pub fn shift<T: Clone>(input: &[T]) -> (T, Vec<T>) {
    strict(try_shift(input))
}

/// Returns a copy of the sequence with `items` appended.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::push(&[1, 2], &[3, 4]), [1, 2, 3, 4]);
/// ```
pub fn push<T: Clone>(input: &[T], items: &[T]) -> Vec<T> {
    [input, items].concat()
}

/// Returns a copy of the sequence with `items` prepended, in the given order.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::unshift(&[1, 2], &[8, 9]), [8, 9, 1, 2]);
/// ```
pub fn unshift<T: Clone>(input: &[T], items: &[T]) -> Vec<T> {
    [items, input].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_ranges() {
        let nums = [1, 2, 3, 4, 5];
        assert_eq!(fill(&nums, 1, 1, 0), nums);
        assert_eq!(fill(&nums, 3, 5, 0), [1, 2, 3, 0, 0]);
        assert_eq!(fill(&nums, 0, 5, 7), [7; 5]);
        assert_eq!(nums, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn fill_rejects_bad_ranges() {
        let nums = [1, 2, 3];
        assert!(try_fill(&nums, 2, 1, 0).is_err());
        assert!(try_fill(&nums, 0, 4, 0).is_err());
        assert!(try_fill(&nums, 4, 4, 0).is_err());
        assert_eq!(try_fill(&nums, 3, 3, 0), Ok(nums.to_vec()));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn strict_fill_panics() {
        fill(&[1, 2, 3], 0, 10, 0);
    }

    #[test]
    fn pop_and_shift() {
        let nums = [1, 2, 3, 4, 5];
        assert_eq!(pop(&nums), (5, vec![1, 2, 3, 4]));
        assert_eq!(shift(&nums), (1, vec![2, 3, 4, 5]));
        assert_eq!(pop(&[1]), (1, vec![]));
        assert_eq!(nums, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn pop_and_shift_empty() {
        let empty: &[i32] = &[];
        assert_eq!(try_pop(empty), Err(SeqError::empty("pop")));
        assert_eq!(try_shift(empty), Err(SeqError::empty("shift")));
    }

    #[test]
    #[should_panic(expected = "cannot pop an empty sequence")]
    fn strict_pop_panics() {
        pop(&[] as &[i32]);
    }

    #[test]
    fn push_and_unshift() {
        let nums = [1, 2, 3];
        assert_eq!(push(&nums, &[]), nums);
        assert_eq!(unshift(&nums, &[0]), [0, 1, 2, 3]);
        assert_eq!(push(&[] as &[i32], &[1, 2]), [1, 2]);
    }
}
