//! The error type shared by the fallible operations.
//!
//! Operations that have no meaningful result for some inputs (an empty
//! sequence for [`try_reduce`](crate::seq::try_reduce), a bad range for
//! [`try_fill`](crate::seq::try_fill)) report it through [`SeqError`].
//! The strict forms and [`Chain`](crate::Chain) panic with the same message,
//! while the [`pipe`](crate::pipe) steps hand the error back to the caller.

/// Result type alias for sequence operations.
pub type Result<T, E = SeqError> = std::result::Result<T, E>;

/// An operation could not produce a result for the given sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// The operation needs at least one element.
    #[error("cannot {op} an empty sequence")]
    Empty {
        /// Name of the operation that was attempted.
        op: &'static str,
    },

    /// The requested range does not fit inside the sequence.
    #[error("range {start}..{end} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
        /// Length of the sequence the range was applied to.
        len: usize,
    },
}

impl SeqError {
    #[inline]
    pub(crate) const fn empty(op: &'static str) -> Self {
        Self::Empty { op }
    }

    /// Returns `true` if the error was caused by an empty input.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Unwraps a result of the strict forms, panicking with the error message.
#[inline]
#[track_caller]
pub(crate) fn strict<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}
