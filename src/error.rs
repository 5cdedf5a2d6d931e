//! Error types for the assignment engine.
//!
//! Three kinds of failure: invalid input, cooperative cancellation, and
//! broken invariants. A broken invariant is always a bug in this crate,
//! never a consequence of caller data.

use thiserror::Error;

/// Errors produced by [`crate::assign`] and its component stages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller supplied structurally invalid input (e.g. an empty
    /// endpoint roster).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of what was wrong.
        message: String,
    },

    /// A cooperative cancellation check observed a cancellation request.
    /// Any partial assignment computed so far is discarded.
    #[error("assignment cancelled")]
    Cancelled,

    /// An internal invariant was violated. This indicates a bug in the
    /// matcher or one of its collaborators, not a problem with caller data.
    #[error("internal invariant violated: {message}")]
    Internal {
        /// Description of the invariant that failed.
        message: String,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
