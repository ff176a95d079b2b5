use std::{cell::RefCell, cmp::Ordering, fmt::Display, hash::Hash};

use rand::RngExt;

use crate::{
    error::{Result, SeqError},
    groups::Groups,
    num::Number,
    seq,
};

fn non_empty<'a, T>(input: &'a [T], op: &'static str) -> Result<&'a [T]> {
    if input.is_empty() {
        Err(SeqError::empty(op))
    } else {
        Ok(input)
    }
}

/// Step for [`seq::filter`]. Never fails.
pub fn filter<T, F>(pred: F) -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |input: &[T]| Ok(seq::filter(input, &pred))
}

/// Step for [`seq::map`]. Never fails.
///
/// # Examples
///
/// ```
/// use seqops::pipe;
///
/// let to_text = pipe::map(|x: &u8| format!("#{x}"));
/// assert_eq!(to_text(&[1, 2]), Ok(vec!["#1".to_string(), "#2".to_string()]));
/// ```
pub fn map<T, U, F>(f: F) -> impl Fn(&[T]) -> Result<Vec<U>>
where
    F: Fn(&T) -> U,
{
    move |input: &[T]| Ok(seq::map(input, &f))
}

/// Step for [`seq::flat_map`]. Never fails.
pub fn flat_map<T, U, I, F>(f: F) -> impl Fn(&[T]) -> Result<Vec<U>>
where
    I: IntoIterator<Item = U>,
    F: Fn(&T) -> I,
{
    move |input: &[T]| Ok(seq::flat_map(input, &f))
}

/// Step for [`seq::for_each`]. Passes a copy of the input through unchanged.
pub fn for_each<T, F>(action: F) -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T),
{
    move |input: &[T]| {
        seq::for_each(input, &action);
        Ok(input.to_vec())
    }
}

/// Step for [`seq::try_reduce`]. Fails on an empty input.
///
/// # Examples
///
/// ```
/// use seqops::{SeqError, pipe};
///
/// let total = pipe::reduce(|a: i32, b| a + b);
/// assert_eq!(total(&[1, 2, 3, 4, 5]), Ok(15));
/// assert_eq!(total(&[]), Err(SeqError::Empty { op: "reduce" }));
/// ```
pub fn reduce<T, F>(f: F) -> impl Fn(&[T]) -> Result<T>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    move |input: &[T]| trace_failure!("reduce", seq::try_reduce(input, &f))
}

/// Like [`reduce`], but an empty input yields `T::default()` instead of an
/// error.
///
/// Only use this when the default value can't be mistaken for a real
/// result, e.g. a sum where zero and "nothing" mean the same thing.
pub fn reduce_or_default<T, F>(f: F) -> impl Fn(&[T]) -> Result<T>
where
    T: Clone + Default,
    F: Fn(T, T) -> T,
{
    move |input: &[T]| Ok(seq::try_reduce(input, &f).unwrap_or_default())
}

/// Step for [`seq::find`], returning an owned match. Never fails.
pub fn find<T, F>(pred: F) -> impl Fn(&[T]) -> Result<Option<T>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |input: &[T]| Ok(seq::find(input, &pred).cloned())
}

/// Step for [`seq::any`].
pub fn any<T, F>(pred: F) -> impl Fn(&[T]) -> Result<bool>
where
    F: Fn(&T) -> bool,
{
    move |input: &[T]| Ok(seq::any(input, &pred))
}

/// Same as [`any`].
pub fn some<T, F>(pred: F) -> impl Fn(&[T]) -> Result<bool>
where
    F: Fn(&T) -> bool,
{
    any(pred)
}

/// Step for [`seq::every`]. An empty input is vacuously `true`.
pub fn every<T, F>(pred: F) -> impl Fn(&[T]) -> Result<bool>
where
    F: Fn(&T) -> bool,
{
    move |input: &[T]| Ok(seq::every(input, &pred))
}

/// Step for [`seq::try_sum`]. Fails on an empty input.
pub fn sum<T: Number>() -> impl Fn(&[T]) -> Result<T> {
    |input: &[T]| trace_failure!("sum", seq::try_sum(input))
}

/// Step for [`seq::try_product`]. Fails on an empty input.
pub fn product<T: Number>() -> impl Fn(&[T]) -> Result<T> {
    |input: &[T]| trace_failure!("product", seq::try_product(input))
}

/// Step for [`seq::try_min`]. Fails on an empty input.
pub fn min<T: Number>() -> impl Fn(&[T]) -> Result<T> {
    |input: &[T]| trace_failure!("min", seq::try_min(input))
}

/// Step for [`seq::try_max`]. Fails on an empty input.
pub fn max<T: Number>() -> impl Fn(&[T]) -> Result<T> {
    |input: &[T]| trace_failure!("max", seq::try_max(input))
}

/// Step for [`seq::reverse`].
pub fn reverse<T: Clone>() -> impl Fn(&[T]) -> Result<Vec<T>> {
    |input: &[T]| Ok(seq::reverse(input))
}

/// Step for [`seq::shuffle`], using the thread-local generator.
pub fn shuffle<T: Clone>() -> impl Fn(&[T]) -> Result<Vec<T>> {
    |input: &[T]| Ok(seq::shuffle(input))
}

/// Step for [`seq::shuffle_with`]. The step owns `rng` and advances it on
/// every call, so consecutive calls give different permutations while a
/// seeded generator keeps the whole run reproducible.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use seqops::pipe;
///
/// let a = pipe::shuffle_with::<i32, _>(StdRng::seed_from_u64(3));
/// let b = pipe::shuffle_with::<i32, _>(StdRng::seed_from_u64(3));
///
/// assert_eq!(a(&[1, 2, 3, 4]), b(&[1, 2, 3, 4]));
/// ```
pub fn shuffle_with<T, R>(rng: R) -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone,
    R: RngExt,
{
    let rng = RefCell::new(rng);
    move |input: &[T]| Ok(seq::shuffle_with(input, &mut *rng.borrow_mut()))
}

/// Step for [`seq::sort`]. Fails on an empty input, so an empty result can
/// never be mistaken for a successful sort.
///
/// # Examples
///
/// ```
/// use seqops::pipe;
///
/// let ascending = pipe::sort(|a: &i32, b: &i32| a < b);
///
/// assert_eq!(ascending(&[3, 1, 2]), Ok(vec![1, 2, 3]));
/// assert!(ascending(&[]).is_err());
/// ```
pub fn sort<T, F>(less: F) -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    move |input: &[T]| {
        trace_failure!(
            "sort",
            non_empty(input, "sort").map(|input| seq::sort(input, &less))
        )
    }
}

/// Step for [`seq::sort_by`]. Fails on an empty input.
pub fn sort_by<T, F>(compare: F) -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    move |input: &[T]| {
        trace_failure!(
            "sort",
            non_empty(input, "sort").map(|input| seq::sort_by(input, &compare))
        )
    }
}

/// Step for [`seq::unique`].
pub fn unique<T>() -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone + PartialEq,
{
    |input: &[T]| Ok(seq::unique(input))
}

/// Step for [`seq::unique_by`]: keeps the first element of every key.
pub fn unique_by<T, K, F>(key: F) -> impl Fn(&[T]) -> Result<Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    move |input: &[T]| Ok(seq::unique_by(input, &key))
}

/// Step appending `other` to the input, see [`seq::union`].
pub fn union<T: Clone>(other: Vec<T>) -> impl Fn(&[T]) -> Result<Vec<T>> {
    move |input: &[T]| Ok(seq::union(input, &other))
}

/// Step for [`seq::try_fill`]. Fails if the range does not fit the input.
pub fn fill<T: Clone>(start: usize, end: usize, value: T) -> impl Fn(&[T]) -> Result<Vec<T>> {
    move |input: &[T]| trace_failure!("fill", seq::try_fill(input, start, end, value.clone()))
}

/// Step for [`seq::join`].
pub fn join<T: Display>(sep: &str) -> impl Fn(&[T]) -> Result<String> + use<T> {
    let sep = sep.to_owned();
    move |input: &[T]| Ok(seq::join(input, &sep))
}

/// Step for [`seq::try_pop`]. Fails on an empty input.
///
/// # Examples
///
/// ```
/// use seqops::pipe;
///
/// let pop = pipe::pop::<i32>();
/// assert_eq!(pop(&[1, 2, 3]), Ok((3, vec![1, 2])));
/// assert!(pop(&[]).is_err());
/// ```
pub fn pop<T: Clone>() -> impl Fn(&[T]) -> Result<(T, Vec<T>)> {
    |input: &[T]| trace_failure!("pop", seq::try_pop(input))
}

/// Step for [`seq::try_shift`]. Fails on an empty input.
pub fn shift<T: Clone>() -> impl Fn(&[T]) -> Result<(T, Vec<T>)> {
    |input: &[T]| trace_failure!("shift", seq::try_shift(input))
}

/// Step for [`seq::push`].
pub fn push<T: Clone>(items: Vec<T>) -> impl Fn(&[T]) -> Result<Vec<T>> {
    move |input: &[T]| Ok(seq::push(input, &items))
}

/// Step for [`seq::unshift`].
pub fn unshift<T: Clone>(items: Vec<T>) -> impl Fn(&[T]) -> Result<Vec<T>> {
    move |input: &[T]| Ok(seq::unshift(input, &items))
}

/// Step for [`seq::group_by`]. An empty input gives empty groups.
pub fn group_by<T, K, F>(key_fn: F) -> impl Fn(&[T]) -> Result<Groups<K, T>>
where
    T: Clone,
    K: Clone + Eq + Hash,
    F: Fn(&T) -> K,
{
    move |input: &[T]| Ok(seq::group_by(input, &key_fn))
}

/// Step for [`seq::index_of`].
pub fn index_of<T: PartialEq>(value: T) -> impl Fn(&[T]) -> Result<Option<usize>> {
    move |input: &[T]| Ok(seq::index_of(input, &value))
}

/// Step for [`seq::contains`].
pub fn contains<T: PartialEq>(value: T) -> impl Fn(&[T]) -> Result<bool> {
    move |input: &[T]| Ok(seq::contains(input, &value))
}

/// Step comparing the input with `other`, see [`seq::equals`].
pub fn equals<T: PartialEq>(other: Vec<T>) -> impl Fn(&[T]) -> Result<bool> {
    move |input: &[T]| Ok(seq::equals(input, &other))
}
