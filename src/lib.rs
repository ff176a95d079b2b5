//! Eager, generic operations over sequences, in three flavors.
//!
//! Filtering, mapping, reducing, sorting, deduplicating, grouping and a
//! handful of editing primitives, all working on slices of any element type.
//! No operation modifies its input: every result is a new [`Vec`], a scalar,
//! or a [`Groups`] mapping.
//!
//! # Motivation
//!
//! The standard library already has most of these as [`Iterator`] adaptors
//! or in-place slice methods. They are great building blocks, but a few
//! everyday tasks keep needing the same glue:
//!
//! ```
//! let nums = vec![3, 1, 2, 3];
//!
//! // Sorting a copy without touching `nums`.
//! let mut sorted = nums.clone();
//! sorted.sort();
//!
//! // Removing duplicates while keeping the first-seen order.
//! let mut seen = std::collections::HashSet::new();
//! let unique: Vec<_> = nums.iter().copied().filter(|x| seen.insert(*x)).collect();
//!
//! assert_eq!(sorted, [1, 2, 3, 3]);
//! assert_eq!(unique, [3, 1, 2]);
//! ```
//!
//! This crate names each of those tasks once:
//!
//! ```
//! use seqops::seq;
//!
//! let nums = vec![3, 1, 2, 3];
//!
//! assert_eq!(seq::sort(&nums, |a, b| a < b), [1, 2, 3, 3]);
//! assert_eq!(seq::unique(&nums), [3, 1, 2]);
//! assert_eq!(nums, [3, 1, 2, 3]);
//! ```
//!
//! # Three ways in
//!
//! The same operations are offered three times, and they differ only in how
//! they are combined and how they report an input they can't handle, such as
//! reducing an empty sequence:
//!
//! - [`seq`]: plain functions. `try_xxx` returns a [`Result`], the strict
//!   form panics.
//! - [`pipe`]: each operation becomes a reusable *step*, a closure
//!   `Fn(&[T]) -> Result<U>`. Steps are composed with [`pipe::then`] or the
//!   [`try_pipe!`] macro, which stop at the first error.
//! - [`Chain`]: an owned sequence with the operations as methods, for
//!   fluent call chains. It panics like the strict forms do.
//!
//! ```
//! use seqops::{Chain, SeqError, pipe, seq, try_pipe};
//!
//! let orders = [12, 7, 30, 7, 18];
//!
//! // Functions.
//! let big = seq::filter(&orders, |&amount| amount > 10);
//! assert_eq!(seq::try_sum(&big), Ok(60));
//!
//! // Steps.
//! let total = try_pipe!(
//!     orders.to_vec(),
//!     pipe::filter(|&amount: &i32| amount > 100),
//!     pipe::sum::<i32>(),
//! );
//! assert_eq!(total, Err(SeqError::Empty { op: "sum" }));
//!
//! // Chain.
//! let top = Chain::from(orders.to_vec())
//!     .unique()
//!     .sort(|a, b| a > b)
//!     .join(" > ");
//! assert_eq!(top, "30 > 18 > 12 > 7");
//! ```
//!
//! # Features
//!
//! - `tracing` (default): failing pipeline steps emit a `debug` event through
//!   [`tracing`](https://docs.rs/tracing), with the operation name and the
//!   error.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod chain;
mod error;
mod groups;
mod num;

pub mod pipe;
pub mod prelude;
pub mod seq;

#[cfg(test)]
mod test_utils;

pub use chain::Chain;
pub use error::{Result, SeqError};
pub use groups::Groups;
pub use num::Number;
