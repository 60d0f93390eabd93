//! Match configuration for selector construction and traversal.

use serde::{Deserialize, Serialize};

use crate::policy::FirstClausePolicy;

/// Settings used when assembling selectors and walking document trees.
///
/// # Defaults
///
/// - `first_clause_policy`: [`FirstClausePolicy::Conjoin`]
/// - `max_visited_nodes`: 100 000
///
/// Missing fields fall back to their defaults when deserialising.
///
/// # Example
///
/// ```
/// use sift_core::{FirstClausePolicy, MatchConfig};
///
/// let config = MatchConfig::default();
/// assert_eq!(config.first_clause_policy(), FirstClausePolicy::Conjoin);
/// assert_eq!(config.max_visited_nodes(), 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// How a disjunction stores a multi-predicate first clause.
    first_clause_policy: FirstClausePolicy,
    /// Maximum nodes a traversal visits before truncating its results.
    max_visited_nodes: usize,
}

impl MatchConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(first_clause_policy: FirstClausePolicy, max_visited_nodes: usize) -> Self {
        Self {
            first_clause_policy,
            max_visited_nodes,
        }
    }

    /// Returns the first clause policy.
    #[must_use]
    pub const fn first_clause_policy(&self) -> FirstClausePolicy {
        self.first_clause_policy
    }

    /// Returns the traversal visit bound.
    #[must_use]
    pub const fn max_visited_nodes(&self) -> usize {
        self.max_visited_nodes
    }

    /// Returns a copy with the given first clause policy.
    #[must_use]
    pub const fn with_first_clause_policy(mut self, policy: FirstClausePolicy) -> Self {
        self.first_clause_policy = policy;
        self
    }

    /// Returns a copy with the given traversal visit bound.
    #[must_use]
    pub const fn with_max_visited_nodes(mut self, max_visited_nodes: usize) -> Self {
        self.max_visited_nodes = max_visited_nodes;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_clause_policy: FirstClausePolicy::default(),
            max_visited_nodes: 100_000,
        }
    }
}
