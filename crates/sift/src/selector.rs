//! Compiled selectors and the document traversal driver.

use std::fmt;
use std::ops::ControlFlow;

use sift_core::{BoxedEvaluator, Evaluator, MatchConfig, Node};
use tracing::{debug, warn};

const SELECTOR_TARGET: &str = "sift::selector";

/// A finished evaluator tree ready for matching.
///
/// A selector is immutable once built, so it can be shared between threads
/// and used for any number of queries.
pub struct Selector<N> {
    evaluator: BoxedEvaluator<N>,
    config: MatchConfig,
}

impl<N> Selector<N> {
    /// Wraps a finished evaluator tree.
    #[must_use]
    pub const fn new(evaluator: BoxedEvaluator<N>, config: MatchConfig) -> Self {
        Self { evaluator, config }
    }

    /// Returns the root of the evaluator tree.
    #[must_use]
    pub fn evaluator(&self) -> &dyn Evaluator<N> {
        &*self.evaluator
    }

    /// Returns the configuration the selector was built with.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Tests a single candidate within the context of `root`.
    #[must_use]
    pub fn matches(&self, root: &N, candidate: &N) -> bool {
        self.evaluator.matches(root, candidate)
    }
}

impl<N: Node> Selector<N> {
    /// Collects `root` and every descendant that matches, in document order.
    ///
    /// The walk stops after [`MatchConfig::max_visited_nodes`] elements; the
    /// returned [`Selection`] reports whether that happened.
    #[must_use]
    pub fn select<'a>(&self, root: &'a N) -> Selection<'a, N> {
        let mut nodes = Vec::new();
        let (visited, truncated) = self.walk(root, |node| {
            nodes.push(node);
            ControlFlow::Continue(())
        });
        debug!(
            target: SELECTOR_TARGET,
            selector = %self.evaluator,
            visited,
            matched = nodes.len(),
            "selection complete"
        );
        Selection {
            nodes,
            visited,
            truncated,
        }
    }

    /// Returns the first matching element in document order, if any.
    #[must_use]
    pub fn select_first<'a>(&self, root: &'a N) -> Option<&'a N> {
        let mut first = None;
        self.walk(root, |node| {
            first = Some(node);
            ControlFlow::Break(())
        });
        first
    }

    /// Visits `root` and its descendants in pre-order, calling `on_match` for
    /// each matching element until it breaks or the visit bound is reached.
    ///
    /// Returns the number of elements visited and whether the bound cut the
    /// walk short.
    fn walk<'a>(
        &self,
        root: &'a N,
        mut on_match: impl FnMut(&'a N) -> ControlFlow<()>,
    ) -> (usize, bool) {
        let limit = self.config.max_visited_nodes();
        let mut pending = vec![root];
        let mut visited = 0_usize;

        while let Some(node) = pending.pop() {
            if visited >= limit {
                warn!(
                    target: SELECTOR_TARGET,
                    limit,
                    selector = %self.evaluator,
                    "visit limit reached; selection truncated"
                );
                return (visited, true);
            }
            visited += 1;

            if self.evaluator.matches(root, node) && on_match(node).is_break() {
                break;
            }

            let siblings_start = pending.len();
            pending.extend(node.children());
            if let Some(children) = pending.get_mut(siblings_start..) {
                children.reverse();
            }
        }
        (visited, false)
    }
}

impl<N> fmt::Display for Selector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.evaluator)
    }
}

impl<N> fmt::Debug for Selector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("evaluator", &self.evaluator)
            .field("config", &self.config)
            .finish()
    }
}

/// Elements collected by [`Selector::select`].
#[derive(Debug)]
pub struct Selection<'a, N> {
    nodes: Vec<&'a N>,
    visited: usize,
    truncated: bool,
}

impl<'a, N> Selection<'a, N> {
    /// Returns the matching elements in document order.
    #[must_use]
    pub fn nodes(&self) -> &[&'a N] {
        &self.nodes
    }

    /// Consumes the selection and returns the matching elements.
    #[must_use]
    pub fn into_nodes(self) -> Vec<&'a N> {
        self.nodes
    }

    /// Returns the number of matching elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns how many elements the walk visited.
    #[must_use]
    pub const fn visited(&self) -> usize {
        self.visited
    }

    /// Returns `true` when the visit bound stopped the walk early.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}
