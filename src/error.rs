//! Error types for Medir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Medir operations.
///
/// Provides detailed context about failures such as undefined metrics
/// over empty ground-truth sets.
///
/// # Examples
///
/// ```
/// use medir::error::MedirError;
///
/// let err = MedirError::EmptyCorrectItems { metric: "ndcg" };
/// assert!(err.to_string().contains("correct items"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedirError {
    /// The set of correct items is empty, so the metric is undefined.
    EmptyCorrectItems {
        /// Metric that was requested
        metric: &'static str,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MedirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedirError::EmptyCorrectItems { metric } => {
                write!(f, "Cannot compute {metric}: set of correct items is empty")
            }
            MedirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MedirError {}

impl From<&str> for MedirError {
    fn from(msg: &str) -> Self {
        MedirError::Other(msg.to_string())
    }
}

impl From<String> for MedirError {
    fn from(msg: String) -> Self {
        MedirError::Other(msg)
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MedirError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MedirError> for &str {
    fn eq(&self, other: &MedirError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MedirError>;
