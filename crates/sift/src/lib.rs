//! Sift: boolean selector matching over document trees.
//!
//! This facade crate re-exports the stable types from [`sift_core`] and adds
//! the two collaborators that sit around the combinators:
//!
//! - [`SelectorBuilder`] assembles a combinator tree clause by clause through
//!   the append / rightmost / replace API, the way a selector compiler does.
//! - [`Selector`] holds the finished tree and walks a document tree to
//!   collect matching elements.
//!
//! # Example
//!
//! ```
//! use sift::predicates::{Class, Tag};
//! use sift::SelectorBuilder;
//! use sift_core::test_support::TestElement;
//!
//! // div.note, p
//! let selector = SelectorBuilder::new()
//!     .predicate(Tag::new("div"))
//!     .predicate(Class::new("note"))
//!     .or()
//!     .predicate(Tag::new("p"))
//!     .build()?;
//!
//! let page = TestElement::new("body")
//!     .with_child(TestElement::new("div").with_class("note"))
//!     .with_child(TestElement::new("div"))
//!     .with_child(TestElement::new("p"));
//!
//! assert_eq!(selector.select(&page).len(), 2);
//! assert_eq!(selector.to_string(), ":or[div .note, p]");
//! # Ok::<(), sift::SelectorError>(())
//! ```

mod builder;
mod error;
mod selector;

pub use sift_core::{
    And, BoxedEvaluator, Combinator, CombinatorError, CombiningEvaluator, Evaluator,
    FirstClausePolicy, FirstClausePolicyParseError, MatchConfig, Node, Or, predicates,
};

pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use selector::{Selection, Selector};

#[cfg(test)]
mod tests;
