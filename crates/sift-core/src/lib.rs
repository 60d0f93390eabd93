//! Core evaluator contracts and boolean combinators for the Sift selector
//! matcher.
//!
//! A compiled selector is a tree of evaluators: atomic predicates at the
//! leaves (tag, class, attribute, ...) and [`And`] / [`Or`] combinators at the
//! interior.  This crate defines the [`Evaluator`] and [`Node`] contracts, the
//! shared [`CombiningEvaluator`] storage used by both combinators, a small set
//! of atomic [`predicates`], and the [`MatchConfig`] consumed by the `sift`
//! facade.
//!
//! # Core types
//!
//! - [`Evaluator`] and [`BoxedEvaluator`] - the predicate contract
//! - [`Node`] - the document tree contract consumed by predicates
//! - [`CombiningEvaluator`] and [`Combinator`] - ordered child storage with a
//!   cached count
//! - [`And`] and [`Or`] - conjunction and disjunction
//! - [`FirstClausePolicy`] - how [`Or`] seeds its first clause
//! - [`MatchConfig`] - construction and traversal settings
//! - [`CombinatorError`] - misuse of the mutation API
//!
//! # Example
//!
//! ```
//! use std::fmt;
//!
//! use sift_core::{And, BoxedEvaluator, Evaluator, Or};
//!
//! struct Even;
//!
//! impl fmt::Display for Even {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(":even")
//!     }
//! }
//!
//! impl Evaluator<u32> for Even {
//!     fn matches(&self, _root: &u32, candidate: &u32) -> bool {
//!         candidate % 2 == 0
//!     }
//! }
//!
//! let all: And<u32> = And::new();
//! assert!(all.matches(&0, &7));
//!
//! let mut any: Or<u32> = Or::new();
//! any.add(Box::new(Even) as BoxedEvaluator<u32>);
//! assert!(any.matches(&0, &4));
//! assert!(!any.matches(&0, &5));
//! ```

mod combining;
mod config;
mod error;
mod evaluator;
mod node;
mod policy;
pub mod predicates;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use combining::{And, Combinator, CombiningEvaluator, Or};
pub use config::MatchConfig;
pub use error::CombinatorError;
pub use evaluator::{BoxedEvaluator, Evaluator};
pub use node::Node;
pub use policy::{FirstClausePolicy, FirstClausePolicyParseError};

#[cfg(test)]
mod tests;
