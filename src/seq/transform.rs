/// Returns the elements that satisfy `pred`, in their original order.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::filter(&[1, 2, 3, 4, 5], |&x| x % 2 == 0), [2, 4]);
/// assert!(seq::filter(&[] as &[i32], |_| true).is_empty());
/// ```
pub fn filter<T, F>(input: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    input.iter().filter(|&item| pred(item)).cloned().collect()
}

/// Applies `f` to every element. The output has the same length as the input.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::map(&[1, 2, 3], |x| x * 2), [2, 4, 6]);
/// assert_eq!(seq::map(&[1, 2, 3], |x| x.to_string()), ["1", "2", "3"]);
/// ```
pub fn map<T, U, F>(input: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    input.iter().map(f).collect()
}

/// Maps every element to a sub-sequence and concatenates them in order.
///
/// An element mapped to an empty sub-sequence contributes nothing.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// let out = seq::flat_map(&[1, 2, 3], |&x| vec![x, x * 2]);
/// assert_eq!(out, [1, 2, 2, 4, 3, 6]);
///
/// let out = seq::flat_map(&[1, 2, 3], |&x| if x == 2 { vec![] } else { vec![x] });
/// assert_eq!(out, [1, 3]);
/// ```
pub fn flat_map<T, U, I, F>(input: &[T], f: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> I,
{
    input.iter().flat_map(f).collect()
}

/// Calls `f` on every element, front to back.
pub fn for_each<T, F>(input: &[T], f: F)
where
    F: FnMut(&T),
{
    input.iter().for_each(f);
}

/// Returns the elements in reverse order.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// assert_eq!(seq::reverse(&[1, 2, 3]), [3, 2, 1]);
/// ```
pub fn reverse<T: Clone>(input: &[T]) -> Vec<T> {
    input.iter().rev().cloned().collect()
}
