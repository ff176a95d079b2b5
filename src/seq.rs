//! Eager operations over sequences.
//!
//! Every function here borrows its input as a slice and never modifies it.
//! Operations that produce a sequence return a freshly allocated [`Vec`],
//! cloning elements where they have to be kept.
//!
//! Operations that have no result for some inputs come in two forms:
//!
//! - `try_xxx` returns a [`Result`](crate::Result) with a [`SeqError`](crate::SeqError).
//! - `xxx` is the strict form. It panics with the error message instead.
//!
//! | Operation | Fallible on |
//! |---|---|
//! | [`reduce`], [`sum`], [`product`], [`min`], [`max`] | empty input |
//! | [`pop`], [`shift`] | empty input |
//! | [`fill`] | a range outside the sequence |
//!
//! # Examples
//!
//! ```
//! use seqops::seq;
//!
//! let nums = [1, 2, 3, 4, 5];
//!
//! let evens = seq::filter(&nums, |&num| num % 2 == 0);
//! assert_eq!(evens, [2, 4]);
//!
//! assert_eq!(seq::reduce(&nums, |a, b| a + b), 15);
//! assert!(seq::try_reduce(&[] as &[i32], |a, b| a + b).is_err());
//!
//! // The input is left as it was.
//! assert_eq!(nums, [1, 2, 3, 4, 5]);
//! ```

mod dedup;
mod edit;
mod fold;
mod group;
mod order;
mod search;
mod text;
mod transform;

pub use dedup::*;
pub use edit::*;
pub use fold::*;
pub use group::*;
pub use order::*;
pub use search::*;
pub use text::*;
pub use transform::*;
