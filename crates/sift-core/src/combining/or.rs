use std::fmt;

use tracing::debug;

use super::{And, COMBINING_TARGET, Combinator, CombiningEvaluator};
use crate::evaluator::{BoxedEvaluator, Evaluator};
use crate::policy::FirstClausePolicy;

/// Disjunction: any visible clause matching is sufficient.
///
/// Clauses are evaluated in insertion order and evaluation stops at the first
/// clause that matches.  An empty disjunction matches nothing.
///
/// Renders as `:or[a, b]`.
pub struct Or<N> {
    combining: CombiningEvaluator<N>,
}

impl<N> Or<N> {
    /// Creates an empty disjunction.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            combining: CombiningEvaluator::new(),
        }
    }

    /// Appends one clause and publishes it to matching immediately.
    ///
    /// Clauses arrive one at a time while a selector list is assembled, so
    /// unlike [`Combinator::append`] the cached count is refreshed here.
    pub fn add(&mut self, clause: BoxedEvaluator<N>) {
        self.combining.append(clause);
        self.combining.refresh_count();
    }
}

impl<N: 'static> Or<N> {
    /// Creates a disjunction whose first clause is built from `evaluators`
    /// under the default [`FirstClausePolicy`].
    #[must_use]
    pub fn from_first_clause(evaluators: Vec<BoxedEvaluator<N>>) -> Self {
        Self::with_first_clause(evaluators, FirstClausePolicy::default())
    }

    /// Creates a disjunction whose first clause is built from `evaluators`.
    ///
    /// With [`FirstClausePolicy::Conjoin`] two or more evaluators become a
    /// single [`And`] clause, so later clauses added with [`Or::add`] sit
    /// beside `(a AND b)`.  With [`FirstClausePolicy::Flatten`] the wrapping
    /// check runs against the disjunction's own count, which is still zero,
    /// so every evaluator becomes a separate clause.  Zero or one evaluator is
    /// stored as-is under either policy.
    #[must_use]
    pub fn with_first_clause(
        evaluators: Vec<BoxedEvaluator<N>>,
        policy: FirstClausePolicy,
    ) -> Self {
        let incoming = evaluators.len();
        let mut combining: CombiningEvaluator<N> = CombiningEvaluator::new();
        let wrap_threshold = match policy {
            FirstClausePolicy::Conjoin => incoming,
            FirstClausePolicy::Flatten => combining.count(),
        };
        if wrap_threshold > 1 {
            combining.append(Box::new(And::from_evaluators(evaluators)));
        } else {
            for evaluator in evaluators {
                combining.append(evaluator);
            }
        }
        combining.refresh_count();
        debug!(
            target: COMBINING_TARGET,
            %policy,
            incoming,
            clauses = combining.count(),
            "seeded first or-clause"
        );
        Self { combining }
    }
}

impl<N> Evaluator<N> for Or<N> {
    fn matches(&self, root: &N, candidate: &N) -> bool {
        self.combining
            .iter()
            .any(|clause| clause.matches(root, candidate))
    }
}

impl<N> Combinator<N> for Or<N> {
    fn combining(&self) -> &CombiningEvaluator<N> {
        &self.combining
    }

    fn combining_mut(&mut self) -> &mut CombiningEvaluator<N> {
        &mut self.combining
    }
}

impl<N> Default for Or<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Display for Or<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(":or[")?;
        self.combining.write_joined(f, ", ")?;
        f.write_str("]")
    }
}

impl<N> fmt::Debug for Or<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Or").field(&self.combining).finish()
    }
}
