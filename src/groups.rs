//! The mapping produced by [`group_by`](crate::seq::group_by).

use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::{self, Debug},
    hash::Hash,
};

/// Elements grouped by key.
///
/// Groups are kept in the order their keys were first seen, and each group
/// keeps its elements in insertion order. Iteration is therefore
/// deterministic for a given input.
///
/// # Examples
///
/// ```
/// use seqops::seq;
///
/// let rows = [("A", 1), ("B", 1), ("A", 2)];
/// let groups = seq::group_by(&rows, |row| row.0);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get("A"), Some(&[("A", 1), ("A", 2)][..]));
/// assert_eq!(groups.keys().collect::<Vec<_>>(), [&"A", &"B"]);
/// ```
#[derive(Clone)]
pub struct Groups<K, T> {
    groups: Vec<(K, Vec<T>)>,
    index: HashMap<K, usize>,
}

impl<K, T> Groups<K, T> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, group)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.groups
            .iter()
            .map(|(key, items)| (key, items.as_slice()))
    }
}

impl<K: Eq + Hash, T> Groups<K, T> {
    /// Returns the group for `key`, if any element produced it.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let &i = self.index.get(key)?;
        Some(&self.groups[i].1)
    }

    /// Returns `true` if some element produced `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Converts into a [`HashMap`], dropping the key order.
    pub fn into_map(self) -> HashMap<K, Vec<T>> {
        self.groups.into_iter().collect()
    }
}

impl<K: Clone + Eq + Hash, T> Groups<K, T> {
    /// Appends `item` to the group of `key`, creating the group if needed.
    pub fn insert(&mut self, key: K, item: T) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].1.push(item),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![item]));
            }
        }
    }
}

impl<K, T> Default for Groups<K, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash, T> FromIterator<(K, T)> for Groups<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut groups = Self::new();
        groups.extend(iter);
        groups
    }
}

impl<K: Clone + Eq + Hash, T> Extend<(K, T)> for Groups<K, T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(|(key, item)| self.insert(key, item));
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);

    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

// Two mappings are equal when they hold the same groups in the same order.
impl<K: PartialEq, T: PartialEq> PartialEq for Groups<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Eq, T: Eq> Eq for Groups<K, T> {}

impl<K: Debug, T: Debug> Debug for Groups<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
