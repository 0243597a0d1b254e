//! Depth-first pre-order walk with an explicit stack.

use std::iter::FusedIterator;

use tracing::{instrument, trace};

use crate::domain::node::AstNode;

/// Lazy pre-order iterator: a node is yielded before any of its descendants,
/// siblings left to right.
///
/// Children are pushed in reverse so that the leftmost one is popped first.
/// Memory is bounded by the stack, never by the call stack, so tree depth does
/// not matter. Dropping the iterator abandons the walk.
#[derive(Debug)]
pub struct PreOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: AstNode> PreOrder<'a, N> {
    pub fn new(root: &'a N) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, N: AstNode> Iterator for PreOrder<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().reversed());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<N: AstNode> FusedIterator for PreOrder<'_, N> {}

/// Pre-order traversal from `root`. Lazy.
#[instrument(level = "trace", skip_all)]
pub fn pre_order<N: AstNode>(root: &N) -> PreOrder<'_, N> {
    trace!("pre-order walk started");
    PreOrder::new(root)
}

/// Every node reachable from `root`, each exactly once. Same order as
/// [`pre_order`].
pub fn all_nodes<N: AstNode>(root: &N) -> PreOrder<'_, N> {
    pre_order(root)
}
