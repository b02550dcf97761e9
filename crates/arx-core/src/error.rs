//! Error types for the Arx runtime.
//!
//! One enum covers every failure a runtime call can report. All of them are
//! recoverable: the caller receives the error as a value and decides whether
//! to surface it.

use std::error::Error;
use std::fmt;

/// Errors returned by list, string, and range operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeError {
    /// Storage could not be obtained, either because the allocator refused
    /// or because the configured capacity limit was reached.
    AllocationFailed {
        /// Number of bytes the operation asked for.
        requested: usize,
        /// Largest number of bytes the container may hold.
        limit: usize,
    },
    /// A parameter was rejected before any work was done
    /// (zero step, empty delimiter, zero element width, ...).
    InvalidArgument {
        /// Human-readable description of the rejected parameter.
        reason: String,
    },
    /// Slice bounds outside `0 <= start <= end <= len`.
    InvalidRange {
        /// Requested start index.
        start: usize,
        /// Requested end index (exclusive).
        end: usize,
        /// Length of the list being sliced.
        len: usize,
    },
    /// An index or search produced no result.
    NotFound,
}

impl RuntimeError {
    /// Shorthand for [`RuntimeError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested, limit } => {
                write!(
                    f,
                    "allocation failed: requested {requested} bytes, limit {limit} bytes"
                )
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for length {len}")
            }
            Self::NotFound => write!(f, "not found"),
        }
    }
}

impl Error for RuntimeError {}
