use std::fmt;

use super::{Combinator, CombiningEvaluator};
use crate::evaluator::{BoxedEvaluator, Evaluator};

/// Conjunction: every visible child must match.
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first child that does not match.  An empty conjunction matches every
/// candidate, which callers use as a match-everything placeholder.
///
/// Renders as its children separated by spaces.
pub struct And<N> {
    combining: CombiningEvaluator<N>,
}

impl<N> And<N> {
    /// Creates an empty conjunction.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            combining: CombiningEvaluator::new(),
        }
    }

    /// Creates a conjunction over `evaluators`, all of them visible.
    #[must_use]
    pub fn from_evaluators(evaluators: Vec<BoxedEvaluator<N>>) -> Self {
        Self {
            combining: CombiningEvaluator::from_evaluators(evaluators),
        }
    }

    /// Consumes the conjunction and returns its children.
    #[must_use]
    pub fn into_evaluators(self) -> Vec<BoxedEvaluator<N>> {
        self.combining.into_evaluators()
    }
}

impl<N> Evaluator<N> for And<N> {
    fn matches(&self, root: &N, candidate: &N) -> bool {
        self.combining
            .iter()
            .all(|evaluator| evaluator.matches(root, candidate))
    }
}

impl<N> Combinator<N> for And<N> {
    fn combining(&self) -> &CombiningEvaluator<N> {
        &self.combining
    }

    fn combining_mut(&mut self) -> &mut CombiningEvaluator<N> {
        &mut self.combining
    }
}

impl<N> Default for And<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<BoxedEvaluator<N>> for And<N> {
    fn from_iter<I: IntoIterator<Item = BoxedEvaluator<N>>>(iter: I) -> Self {
        Self::from_evaluators(iter.into_iter().collect())
    }
}

impl<N> fmt::Display for And<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.combining.write_joined(f, " ")
    }
}

impl<N> fmt::Debug for And<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("And").field(&self.combining).finish()
    }
}
