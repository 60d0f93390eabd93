//! The evaluator contract shared by atomic predicates and combinators.

use std::fmt;
use std::sync::Arc;

/// A predicate deciding whether a candidate node satisfies one test.
///
/// `root` is the node the overall query was issued against and `candidate`
/// is the node under test.  Implementations must be a pure function of those
/// two nodes and their own immutable configuration, so a finished evaluator
/// tree can be shared across threads and called any number of times.
///
/// The [`fmt::Display`] rendering is a human-readable approximation of the
/// predicate used for diagnostics only.
pub trait Evaluator<N>: fmt::Display + Send + Sync {
    /// Returns `true` when `candidate`, considered within `root`, satisfies
    /// this evaluator.
    fn matches(&self, root: &N, candidate: &N) -> bool;
}

/// An owned, type-erased evaluator as stored by combinators.
pub type BoxedEvaluator<N> = Box<dyn Evaluator<N>>;

impl<N> fmt::Debug for dyn Evaluator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<N, E> Evaluator<N> for Box<E>
where
    E: Evaluator<N> + ?Sized,
{
    fn matches(&self, root: &N, candidate: &N) -> bool {
        (**self).matches(root, candidate)
    }
}

impl<N, E> Evaluator<N> for Arc<E>
where
    E: Evaluator<N> + ?Sized,
{
    fn matches(&self, root: &N, candidate: &N) -> bool {
        (**self).matches(root, candidate)
    }
}
