//! The document tree contract consumed by atomic predicates.

/// An element in a document tree.
///
/// Combinators never look at node structure; they only forward
/// `(root, candidate)` pairs.  Atomic predicates and the traversal driver use
/// the accessors below.
pub trait Node {
    /// Returns the element's tag name as stored in the tree.
    fn tag_name(&self) -> &str;

    /// Returns the element's `id`, if it has one.
    fn id(&self) -> Option<&str>;

    /// Returns `true` when the element carries the given class.
    fn has_class(&self, class: &str) -> bool;

    /// Returns the value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the element's children in document order.
    fn children(&self) -> impl Iterator<Item = &Self>;
}
