use std::hash::Hash;

use crate::groups::Groups;

/// Groups elements by the key `key_fn` derives from them.
///
/// Groups come out in first-seen key order and keep their elements in input
/// order. An empty input gives an empty mapping.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Item {
///     name: &'static str,
///     qty: u32,
/// }
///
/// let items = [
///     Item { name: "A", qty: 1 },
///     Item { name: "A", qty: 2 },
///     Item { name: "B", qty: 1 },
/// ];
///
/// let groups = seq::group_by(&items, |item| item.name.to_string());
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get("A").map(<[_]>::len), Some(2));
/// assert_eq!(groups.get("B"), Some(&[Item { name: "B", qty: 1 }][..]));
/// ```
pub fn group_by<T, K, F>(input: &[T], mut key_fn: F) -> Groups<K, T>
where
    T: Clone,
    K: Clone + Eq + Hash,
    F: FnMut(&T) -> K,
{
    input
        .iter()
        .map(|item| (key_fn(item), item.clone()))
        .collect()
}
