//! Atomic predicates over [`Node`] elements.
//!
//! These cover the simple selectors needed to exercise the combinators
//! against real trees: universal, type, id, class and attribute selectors,
//! plus negation.  Values are compared as given; normalising them is the
//! caller's concern.

use std::fmt;

use crate::evaluator::{BoxedEvaluator, Evaluator};
use crate::node::Node;

/// Matches every element (`*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllElements;

impl<N: Node> Evaluator<N> for AllElements {
    fn matches(&self, _root: &N, _candidate: &N) -> bool {
        true
    }
}

impl fmt::Display for AllElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*")
    }
}

/// Matches elements by tag name, ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a tag predicate.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the tag name being matched.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<N: Node> Evaluator<N> for Tag {
    fn matches(&self, _root: &N, candidate: &N) -> bool {
        candidate.tag_name().eq_ignore_ascii_case(&self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Matches the element whose `id` equals the given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    id: String,
}

impl Id {
    /// Creates an id predicate.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl<N: Node> Evaluator<N> for Id {
    fn matches(&self, _root: &N, candidate: &N) -> bool {
        candidate.id() == Some(self.id.as_str())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Matches elements carrying a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    class: String,
}

impl Class {
    /// Creates a class predicate.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl<N: Node> Evaluator<N> for Class {
    fn matches(&self, _root: &N, candidate: &N) -> bool {
        candidate.has_class(&self.class)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.class)
    }
}

/// Matches elements that have an attribute, whatever its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
}

impl Attribute {
    /// Creates an attribute presence predicate.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<N: Node> Evaluator<N> for Attribute {
    fn matches(&self, _root: &N, candidate: &N) -> bool {
        candidate.attribute(&self.name).is_some()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// Matches elements whose attribute is present with exactly the given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeWithValue {
    name: String,
    value: String,
}

impl AttributeWithValue {
    /// Creates an attribute value predicate.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Node> Evaluator<N> for AttributeWithValue {
    fn matches(&self, _root: &N, candidate: &N) -> bool {
        candidate.attribute(&self.name) == Some(self.value.as_str())
    }
}

impl fmt::Display for AttributeWithValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}={}]", self.name, self.value)
    }
}

/// Inverts another evaluator (`:not(...)`).
pub struct Not<N> {
    inner: BoxedEvaluator<N>,
}

impl<N> Not<N> {
    /// Wraps `inner` so that it matches exactly when `inner` does not.
    #[must_use]
    pub fn new(inner: BoxedEvaluator<N>) -> Self {
        Self { inner }
    }
}

impl<N> Evaluator<N> for Not<N> {
    fn matches(&self, root: &N, candidate: &N) -> bool {
        !self.inner.matches(root, candidate)
    }
}

impl<N> fmt::Display for Not<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":not({})", self.inner)
    }
}

impl<N> fmt::Debug for Not<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Not").field(&self.inner.to_string()).finish()
    }
}
