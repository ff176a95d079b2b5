/// Returns the first element satisfying `pred`, or `None` if there is none.
///
/// A `None` can't be confused with a found element that happens to be a
/// zero value.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::find(&[0, 1, 2], |&x| x == 0), Some(&0));
/// assert_eq!(seq::find(&[1, 2, 3], |&x| x > 5), None);
/// ```
pub fn find<T, F>(input: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    input.iter().find(|&item| pred(item))
}

/// Returns `true` if at least one element satisfies `pred`.
///
/// An empty sequence has no matching element, so the result is `false`.
pub fn any<T, F>(input: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    input.iter().any(pred)
}

/// Same as [`any`].
#[inline]
pub fn some<T, F>(input: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    any(input, pred)
}

/// Returns `true` if every element satisfies `pred`.
///
/// An empty sequence is vacuously true.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert!(!seq::every(&[2, 4, 5], |&x| x % 2 == 0));
/// assert!(seq::every(&[] as &[i32], |_| false));
/// ```
pub fn every<T, F>(input: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    input.iter().all(pred)
}

/// Returns the position of the first element equal to `value`.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::index_of(&[1, 2, 3, 2], &2), Some(1));
/// assert_eq!(seq::index_of(&[1, 2, 3], &9), None);
/// ```
pub fn index_of<T: PartialEq>(input: &[T], value: &T) -> Option<usize> {
    input.iter().position(|item| item == value)
}

/// Returns `true` if some element equals `value`.
pub fn contains<T: PartialEq>(input: &[T], value: &T) -> bool {
    index_of(input, value).is_some()
}

/// Returns `true` if both sequences have the same length and are pairwise
/// equal in order.
pub fn equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_distinguishes_absence() {
        let nums = [0, 0, 1];
        assert_eq!(find(&nums, |&x| x == 0).copied(), Some(0));
        assert_eq!(find(&nums, |&x| x == 7), None);
        assert_eq!(find(&[] as &[i32], |_| true), None);
    }

    #[test]
    fn find_returns_first_match() {
        let words = ["apple", "avocado", "banana"];
        assert_eq!(find(&words, |w| w.starts_with('a')), Some(&"apple"));
    }

    #[test]
    fn any_every_on_empty() {
        let empty: &[i32] = &[];
        assert!(!any(empty, |_| true));
        assert!(!some(empty, |_| true));
        assert!(every(empty, |_| false));
    }

    #[test]
    fn any_every() {
        let nums = [1, 2, 3, 4, 5];
        assert!(any(&nums, |&x| x % 2 == 0));
        assert!(some(&nums, |&x| x == 5));
        assert!(!every(&nums, |&x| x % 2 == 0));
        assert!(every(&nums, |&x| x > 0));
    }

    #[test]
    fn contains_and_index_of() {
        let nums = [1, 2, 3, 4, 5];
        assert!(contains(&nums, &3));
        assert!(!contains(&nums, &6));
        assert_eq!(index_of(&nums, &5), Some(4));
        assert_eq!(index_of(&[] as &[i32], &5), None);
    }

    #[test]
    fn equality() {
        assert!(equals(&[1, 2, 3], &[1, 2, 3]));
        assert!(!equals(&[1, 2, 3], &[1, 3, 2]));
        assert!(!equals(&[1, 2], &[1, 2, 3]));
        assert!(equals::<i32>(&[], &[]));
    }
}
