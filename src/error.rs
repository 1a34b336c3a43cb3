//! Error types for the Springboard primitives

use thiserror::Error;

/// Main error type for Springboard.
///
/// The taxonomy is intentionally flat: stack-depth exhaustion is the one
/// condition this crate raises itself; everything else is a host error
/// propagated unchanged from the nested-input parsing surface.
#[derive(Error, Debug)]
pub enum Error {
    /// Recursion depth budget exhausted during a direct (non-trampolined)
    /// recursive descent. Carries the depth counter reached at the point
    /// of failure.
    #[error("StackOverflow: call stack depth limit exceeded: {depth} frames, limit was {limit}")]
    StackOverflow {
        /// Depth counter at the moment the budget ran out
        depth: usize,
        /// The configured budget
        limit: usize,
    },

    /// Malformed nested-sequence input
    #[error("ParseError: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// IO error while reading nested-sequence input
    #[error("IOError: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a stack-depth exhaustion error
    pub fn stack_overflow(depth: usize, limit: usize) -> Self {
        Error::StackOverflow { depth, limit }
    }

    /// The depth counter reached when the stack budget ran out, if this
    /// is a [`Error::StackOverflow`].
    pub fn depth_reached(&self) -> Option<usize> {
        match self {
            Error::StackOverflow { depth, .. } => Some(*depth),
            _ => None,
        }
    }
}

/// Result type alias for Springboard
pub type Result<T> = std::result::Result<T, Error>;
