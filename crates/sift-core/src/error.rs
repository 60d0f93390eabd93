//! Errors raised when the combinator mutation API is misused.
//!
//! Matching never fails; these errors only surface while a selector is being
//! assembled and always indicate a bug in the construction code.

use thiserror::Error;

/// Errors from [`CombiningEvaluator`](crate::CombiningEvaluator) mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CombinatorError {
    /// The operation needs a rightmost evaluator but the visible sequence is
    /// empty.
    #[error("cannot {operation}: combinator has no visible evaluators")]
    EmptySequence {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl CombinatorError {
    /// Creates an empty sequence error for the named operation.
    #[must_use]
    pub const fn empty_sequence(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }
}
