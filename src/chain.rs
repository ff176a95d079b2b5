use std::{cmp::Ordering, fmt::Display, hash::Hash, ops::Deref};

use rand::RngExt;

use crate::{groups::Groups, num::Number, seq};

/// An owned sequence with the operations of [`seq`] as methods.
///
/// Every method borrows the chain and returns a new one (or a final value),
/// so a chain can be reused after it was extended. Operations that cannot
/// handle an empty chain panic like the strict forms in [`seq`] do; use the
/// `try_*` functions or the [`pipe`](crate::pipe) steps to get a
/// [`SeqError`](crate::SeqError) instead.
///
/// # Examples
///
/// ```
/// use seqops::Chain;
///
/// let nums = Chain::from(vec![5, 3, 8, 1, 3]);
///
/// let sorted = nums.unique().sort(|a, b| a < b);
/// assert_eq!(sorted.as_slice(), [1, 3, 5, 8]);
///
/// let label = sorted.map(|x| x * 10).join(", ");
/// assert_eq!(label, "10, 30, 50, 80");
///
/// // `nums` is still around.
/// assert_eq!(nums.sum(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Chain<T>(Vec<T>);

impl<T> Chain<T> {
    /// Wraps `items`.
    #[inline]
    pub const fn new(items: Vec<T>) -> Self {
        Self(items)
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Unwraps the chain into its elements.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the chain holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`seq::map`].
    pub fn map<U, F>(&self, f: F) -> Chain<U>
    where
        F: FnMut(&T) -> U,
    {
        Chain(seq::map(&self.0, f))
    }

    /// See [`seq::flat_map`].
    pub fn flat_map<U, I, F>(&self, f: F) -> Chain<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        Chain(seq::flat_map(&self.0, f))
    }

    /// Calls `f` on every element and returns the chain unchanged.
    pub fn for_each<F>(&self, f: F) -> &Self
    where
        F: FnMut(&T),
    {
        seq::for_each(&self.0, f);
        self
    }

    /// See [`seq::find`].
    pub fn find<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        seq::find(&self.0, pred)
    }

    /// See [`seq::any`].
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        seq::any(&self.0, pred)
    }

    /// Same as [`Chain::any`].
    pub fn some<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        seq::some(&self.0, pred)
    }

    /// See [`seq::every`].
    pub fn every<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        seq::every(&self.0, pred)
    }

    /// See [`seq::group_by`].
    pub fn group_by<K, F>(&self, key_fn: F) -> Groups<K, T>
    where
        T: Clone,
        K: Clone + Eq + Hash,
        F: FnMut(&T) -> K,
    {
        seq::group_by(&self.0, key_fn)
    }
}

impl<T: Clone> Chain<T> {
    /// Returns a copy of the elements.
    #[inline]
    pub fn value(&self) -> Vec<T> {
        self.0.clone()
    }

    /// See [`seq::filter`].
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self(seq::filter(&self.0, pred))
    }

    /// See [`seq::reverse`].
    pub fn reverse(&self) -> Self {
        Self(seq::reverse(&self.0))
    }

    /// See [`seq::shuffle`].
    pub fn shuffle(&self) -> Self {
        Self(seq::shuffle(&self.0))
    }

    /// See [`seq::shuffle_with`].
    pub fn shuffle_with<R: RngExt>(&self, rng: &mut R) -> Self {
        Self(seq::shuffle_with(&self.0, rng))
    }

    /// See [`seq::sort`].
    pub fn sort<F>(&self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        Self(seq::sort(&self.0, less))
    }

    /// See [`seq::sort_by`].
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Self(seq::sort_by(&self.0, compare))
    }

    /// See [`seq::unique`].
    pub fn unique(&self) -> Self
    where
        T: PartialEq,
    {
        Self(seq::unique(&self.0))
    }

    /// See [`seq::unique_by`].
    pub fn unique_by<K, F>(&self, key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        Self(seq::unique_by(&self.0, key))
    }

    /// Appends the elements of `other`, see [`seq::union`].
    pub fn union(&self, other: &[T]) -> Self {
        Self(seq::union(&self.0, other))
    }

    /// See [`seq::fill`].
    ///
    /// # Panics
    ///
    /// Panics if `start..end` does not fit the chain.
    #[track_caller]
    pub fn fill(&self, start: usize, end: usize, value: T) -> Self {
        Self(seq::fill(&self.0, start, end, value))
    }

    /// See [`seq::push`].
    pub fn push(&self, items: &[T]) -> Self {
        Self(seq::push(&self.0, items))
    }

    /// See [`seq::unshift`].
    pub fn unshift(&self, items: &[T]) -> Self {
        Self(seq::unshift(&self.0, items))
    }

    /// Splits off the last element, see [`seq::pop`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn pop(&self) -> (T, Self) {
        let (last, rest) = seq::pop(&self.0);
        (last, Self(rest))
    }

    /// Splits off the first element, see [`seq::shift`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn shift(&self) -> (T, Self) {
        let (first, rest) = seq::shift(&self.0);
        (first, Self(rest))
    }

    /// See [`seq::reduce`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn reduce<F>(&self, f: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        seq::reduce(&self.0, f)
    }
}

impl<T: PartialEq> Chain<T> {
    /// See [`seq::index_of`].
    pub fn index_of(&self, value: &T) -> Option<usize> {
        seq::index_of(&self.0, value)
    }

    /// See [`seq::contains`].
    pub fn contains(&self, value: &T) -> bool {
        seq::contains(&self.0, value)
    }

    /// See [`seq::equals`].
    pub fn equals(&self, other: &[T]) -> bool {
        seq::equals(&self.0, other)
    }
}

impl<T: Number> Chain<T> {
    /// See [`seq::sum`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn sum(&self) -> T {
        seq::sum(&self.0)
    }

    /// See [`seq::product`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn product(&self) -> T {
        seq::product(&self.0)
    }

    /// See [`seq::min`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn min(&self) -> T {
        seq::min(&self.0)
    }

    /// See [`seq::max`].
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    #[track_caller]
    pub fn max(&self) -> T {
        seq::max(&self.0)
    }
}

impl<T: Display> Chain<T> {
    /// See [`seq::join`].
    pub fn join(&self, sep: &str) -> String {
        seq::join(&self.0, sep)
    }
}

impl<T> Deref for Chain<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T: Clone> From<&[T]> for Chain<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Self(items.to_vec())
    }
}

impl<T> From<Chain<T>> for Vec<T> {
    #[inline]
    fn from(chain: Chain<T>) -> Self {
        chain.0
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
