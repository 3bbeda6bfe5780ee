//! Walk errors

use super::kind::Kind;
use std::fmt;

/// Result of a walk operation
pub type WalkResult<T> = Result<T, WalkError>;

/// Errors raised while walking a value tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// The active mode does not admit this kind
    KindRejected {
        /// Offending kind
        kind: Kind,
    },

    /// The handlers supply nothing for a reachable kind
    MissingHandler {
        /// Kind without a handler
        kind: Kind,
    },

    /// A type-error policy mapped a value to a kind its payload cannot fill
    KindMismatch {
        /// Kind the policy returned
        kind: Kind,
        /// Kind of the value itself
        actual: Kind,
    },

    /// Nesting deeper than the configured maximum
    RecursionLimitExceeded {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max_depth: usize,
    },

    /// Configuration rejected at construction
    InvalidConfig {
        /// Why the configuration is invalid
        reason: String,
    },

    /// Raised by a custom handler
    Custom {
        /// Error message
        message: String,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::KindRejected { kind } => write!(
                f,
                "Values of type \"{}\" are only allowed in JavaScript mode, not JSON.",
                kind
            ),
            WalkError::MissingHandler { kind } => {
                write!(f, "No handler for values of type \"{}\"", kind)
            }
            WalkError::KindMismatch { kind, actual } => write!(
                f,
                "Cannot handle a value of type \"{}\" as \"{}\"",
                actual, kind
            ),
            WalkError::RecursionLimitExceeded { depth, max_depth } => write!(
                f,
                "Recursion limit exceeded: depth {} exceeds maximum {}",
                depth, max_depth
            ),
            WalkError::InvalidConfig { reason } => write!(f, "Invalid configuration: {}", reason),
            WalkError::Custom { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for WalkError {}

impl From<serde_json::Error> for WalkError {
    fn from(e: serde_json::Error) -> Self {
        WalkError::Custom {
            message: e.to_string(),
        }
    }
}
