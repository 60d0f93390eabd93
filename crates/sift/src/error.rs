//! Errors raised while assembling a selector.

use sift_core::CombinatorError;
use thiserror::Error;

/// Errors from [`SelectorBuilder`](crate::SelectorBuilder) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectorError {
    /// A clause of a selector list has no predicates, as in `a, , b`.
    #[error("selector clause {index} has no predicates")]
    EmptyClause {
        /// Zero-based position of the empty clause.
        index: usize,
    },

    /// Negation was requested before any predicate was added to the clause.
    #[error("no predicate to negate in the current clause")]
    NothingToNegate,

    /// The combinator mutation API rejected an operation.
    #[error(transparent)]
    Combinator(#[from] CombinatorError),
}
