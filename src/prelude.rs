//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the wrapper types, the error and the [`try_pipe!`]
//! macro.
//!
//! # Example
//!
//! ```
//! use seqops::prelude::*;
//!
//! let nums: Chain<u32> = (1..=4).collect();
//! assert_eq!(nums.max(), 4);
//! ```

pub use crate::{Chain, Groups, Number, SeqError, try_pipe};
