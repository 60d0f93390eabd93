//! Ordered child storage shared by the [`And`] and [`Or`] combinators.
//!
//! A [`CombiningEvaluator`] owns its children and keeps a cached count of
//! them.  The matching loops of both combinators iterate up to the cached
//! count, not the live length, so construction code can append several
//! evaluators and publish them in one step with
//! [`refresh_count`](CombiningEvaluator::refresh_count).  Only the rightmost
//! visible child may be rewritten after construction, and only before the
//! first match.

mod and;
mod or;

use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::CombinatorError;
use crate::evaluator::{BoxedEvaluator, Evaluator};

pub use and::And;
pub use or::Or;

const COMBINING_TARGET: &str = "sift_core::combining";

/// Ordered sequence of child evaluators with a cached count.
///
/// Invariant: after [`refresh_count`](Self::refresh_count) the cached count
/// equals the live length.  Between an [`append`](Self::append) and the next
/// refresh the new evaluator is stored but not visible to matching.
pub struct CombiningEvaluator<N> {
    evaluators: Vec<BoxedEvaluator<N>>,
    count: usize,
}

impl<N> CombiningEvaluator<N> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            evaluators: Vec::new(),
            count: 0,
        }
    }

    /// Creates a sequence holding `evaluators`, all of them visible.
    #[must_use]
    pub fn from_evaluators(evaluators: Vec<BoxedEvaluator<N>>) -> Self {
        let count = evaluators.len();
        Self { evaluators, count }
    }

    /// Adds an evaluator to the end of the sequence.
    ///
    /// The cached count is left untouched; call
    /// [`refresh_count`](Self::refresh_count) once the batch is complete.
    pub fn append(&mut self, evaluator: BoxedEvaluator<N>) {
        self.evaluators.push(evaluator);
    }

    /// Returns the last visible evaluator, or `None` when the cached count is
    /// zero.
    #[must_use]
    pub fn rightmost(&self) -> Option<&dyn Evaluator<N>> {
        let index = self.count.checked_sub(1)?;
        self.evaluators.get(index).map(|evaluator| &**evaluator)
    }

    /// Overwrites the last visible evaluator in place and returns the one it
    /// replaced.
    ///
    /// All other evaluators and the cached count are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::EmptySequence`] when the cached count is
    /// zero.
    pub fn try_replace_rightmost(
        &mut self,
        replacement: BoxedEvaluator<N>,
    ) -> Result<BoxedEvaluator<N>, CombinatorError> {
        let slot = self
            .count
            .checked_sub(1)
            .and_then(|index| self.evaluators.get_mut(index))
            .ok_or_else(|| CombinatorError::empty_sequence("replace rightmost evaluator"))?;
        Ok(mem::replace(slot, replacement))
    }

    /// Overwrites the last visible evaluator in place and returns the one it
    /// replaced.
    ///
    /// # Panics
    ///
    /// Panics when the cached count is zero.  Callers check
    /// [`rightmost`](Self::rightmost) first; reaching this on an empty
    /// sequence is a bug in the construction code.
    pub fn replace_rightmost(&mut self, replacement: BoxedEvaluator<N>) -> BoxedEvaluator<N> {
        match self.try_replace_rightmost(replacement) {
            Ok(previous) => previous,
            Err(err) => panic!("{err}"),
        }
    }

    /// Recomputes the cached count from the live length.
    pub fn refresh_count(&mut self) {
        let previous = self.count;
        self.count = self.evaluators.len();
        trace!(
            target: COMBINING_TARGET,
            previous,
            count = self.count,
            "refreshed evaluator count"
        );
    }

    /// Returns the cached count used as the matching bound.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the live number of stored evaluators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Iterates over the evaluators visible to matching, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Evaluator<N>> {
        self.evaluators
            .iter()
            .take(self.count)
            .map(|evaluator| &**evaluator)
    }

    /// Consumes the sequence and returns every stored evaluator.
    #[must_use]
    pub fn into_evaluators(self) -> Vec<BoxedEvaluator<N>> {
        self.evaluators
    }

    /// Writes every stored evaluator separated by `separator`.
    fn write_joined(&self, f: &mut fmt::Formatter<'_>, separator: &str) -> fmt::Result {
        for (position, evaluator) in self.evaluators.iter().enumerate() {
            if position > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{evaluator}")?;
        }
        Ok(())
    }
}

impl<N> Default for CombiningEvaluator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for CombiningEvaluator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.evaluators.iter().map(ToString::to_string).collect();
        f.debug_struct("CombiningEvaluator")
            .field("evaluators", &rendered)
            .field("count", &self.count)
            .finish()
    }
}

/// A combinator built on [`CombiningEvaluator`] storage.
///
/// Selector construction code uses these methods to assemble and rewrite a
/// combinator before matching starts.  Matching drivers only need
/// [`Evaluator::matches`].
pub trait Combinator<N>: Evaluator<N> {
    /// Returns the underlying child storage.
    fn combining(&self) -> &CombiningEvaluator<N>;

    /// Returns the underlying child storage mutably.
    fn combining_mut(&mut self) -> &mut CombiningEvaluator<N>;

    /// Adds an evaluator without refreshing the cached count.
    fn append(&mut self, evaluator: BoxedEvaluator<N>) {
        self.combining_mut().append(evaluator);
    }

    /// Returns the last visible evaluator, if any.
    fn rightmost(&self) -> Option<&dyn Evaluator<N>> {
        self.combining().rightmost()
    }

    /// Replaces the last visible evaluator, failing on an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::EmptySequence`] when the cached count is
    /// zero.
    fn try_replace_rightmost(
        &mut self,
        replacement: BoxedEvaluator<N>,
    ) -> Result<BoxedEvaluator<N>, CombinatorError> {
        self.combining_mut().try_replace_rightmost(replacement)
    }

    /// Replaces the last visible evaluator.
    ///
    /// # Panics
    ///
    /// Panics when the cached count is zero.
    fn replace_rightmost(&mut self, replacement: BoxedEvaluator<N>) -> BoxedEvaluator<N> {
        self.combining_mut().replace_rightmost(replacement)
    }

    /// Recomputes the cached count from the live length.
    fn refresh_count(&mut self) {
        self.combining_mut().refresh_count();
    }

    /// Returns the cached count.
    fn count(&self) -> usize {
        self.combining().count()
    }
}
