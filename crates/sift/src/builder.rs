//! Programmatic selector construction.
//!
//! [`SelectorBuilder`] plays the part of a selector compiler without a
//! string parser: predicates are appended to the current compound clause,
//! the rightmost predicate can be rewritten in place, and [`or`] starts the
//! next clause of a selector list.
//!
//! [`or`]: SelectorBuilder::or

use std::fmt;
use std::mem;

use sift_core::predicates::{AllElements, Not};
use sift_core::{And, Combinator, Evaluator, MatchConfig, Node, Or};
use tracing::debug;

use crate::error::SelectorError;
use crate::selector::Selector;

const BUILDER_TARGET: &str = "sift::builder";

/// Assembles a [`Selector`] clause by clause.
///
/// Each clause is a conjunction of predicates.  A builder with a single
/// clause produces that conjunction; several clauses produce a disjunction
/// whose first clause is seeded according to the configured
/// [`FirstClausePolicy`](sift_core::FirstClausePolicy).
///
/// # Example
///
/// ```
/// use sift::predicates::{Attribute, Tag};
/// use sift::SelectorBuilder;
/// use sift_core::test_support::TestElement;
///
/// // a:not([href])
/// let selector = SelectorBuilder::new()
///     .predicate(Tag::new("a"))
///     .predicate(Attribute::new("href"))
///     .negate_last()?
///     .build()?;
///
/// let anchor = TestElement::new("a");
/// assert!(selector.matches(&anchor, &anchor));
/// # Ok::<(), sift::SelectorError>(())
/// ```
pub struct SelectorBuilder<N> {
    config: MatchConfig,
    clauses: Vec<And<N>>,
    current: And<N>,
}

impl<N: Node + 'static> SelectorBuilder<N> {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    /// Creates a builder with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: MatchConfig) -> Self {
        Self {
            config,
            clauses: Vec::new(),
            current: And::new(),
        }
    }

    /// Appends a predicate to the current clause.
    #[must_use]
    pub fn predicate(mut self, evaluator: impl Evaluator<N> + 'static) -> Self {
        self.current.append(Box::new(evaluator));
        self
    }

    /// Wraps the most recently added predicate of the current clause in
    /// [`Not`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::NothingToNegate`] when the current clause is
    /// empty.
    pub fn negate_last(mut self) -> Result<Self, SelectorError> {
        self.current.refresh_count();
        if self.current.rightmost().is_none() {
            return Err(SelectorError::NothingToNegate);
        }
        let negated = self.current.try_replace_rightmost(Box::new(AllElements))?;
        self.current
            .try_replace_rightmost(Box::new(Not::new(negated)))?;
        Ok(self)
    }

    /// Closes the current clause and starts the next one.
    #[must_use]
    pub fn or(mut self) -> Self {
        self.current.refresh_count();
        let finished = mem::take(&mut self.current);
        self.clauses.push(finished);
        self
    }

    /// Finishes construction.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyClause`] when a selector list contains
    /// a clause without predicates.
    pub fn build(self) -> Result<Selector<N>, SelectorError> {
        let Self {
            config,
            mut clauses,
            mut current,
        } = self;
        current.refresh_count();

        if clauses.is_empty() {
            debug!(
                target: BUILDER_TARGET,
                predicates = current.count(),
                "built single-clause selector"
            );
            return Ok(Selector::new(Box::new(current), config));
        }

        clauses.push(current);
        if let Some(index) = clauses.iter().position(|clause| clause.count() == 0) {
            return Err(SelectorError::EmptyClause { index });
        }

        let clause_count = clauses.len();
        let mut remaining = clauses.into_iter();
        let mut or = match remaining.next() {
            Some(first) => {
                Or::with_first_clause(first.into_evaluators(), config.first_clause_policy())
            }
            None => Or::new(),
        };
        for clause in remaining {
            or.add(Box::new(clause));
        }
        debug!(
            target: BUILDER_TARGET,
            clauses = clause_count,
            policy = %config.first_clause_policy(),
            "built selector list"
        );
        Ok(Selector::new(Box::new(or), config))
    }
}

impl<N: Node + 'static> Default for SelectorBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for SelectorBuilder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorBuilder")
            .field("config", &self.config)
            .field("clauses", &self.clauses)
            .field("current", &self.current)
            .finish()
    }
}
