//! Error types shared across the strand crates.
//!
//! Every fallible operation in the workspace reports one of the
//! variants below, raised synchronously at the offending call. The
//! library never retries, recovers, or logs — propagation is entirely
//! the caller's responsibility.

use std::error::Error;
use std::fmt;

/// Errors raised by string, pool, format, and matching operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextError {
    /// A parameter value is invalid for the requested operation
    /// (NUL byte where content is required, zero capacity, reversed
    /// range bounds, mismatched format piece).
    InvalidArgument {
        /// Human-readable description of the offending parameter.
        reason: &'static str,
    },
    /// A position or index lies outside the valid bounds of the target
    /// sequence.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence the index was checked against.
        len: usize,
    },
    /// A pool stack already at the base level was popped.
    EmptyStack,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyStack => write!(f, "pool stack is at the base level"),
        }
    }
}

impl Error for TextError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_index() {
        let err = TextError::OutOfRange { index: 9, len: 4 };
        assert_eq!(err.to_string(), "index 9 out of range for length 4");
    }

    #[test]
    fn display_carries_the_reason() {
        let err = TextError::InvalidArgument {
            reason: "capacity must be at least 1",
        };
        assert!(err.to_string().contains("capacity must be at least 1"));
    }

    #[test]
    fn empty_stack_message() {
        assert_eq!(
            TextError::EmptyStack.to_string(),
            "pool stack is at the base level"
        );
    }
}
