//! Breadth-first walk with a FIFO queue.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{instrument, trace};

use crate::domain::node::AstNode;

/// Lazy level-order iterator: the root, then all depth-1 nodes left to right,
/// then all depth-2 nodes, and so on.
#[derive(Debug)]
pub struct LevelOrder<'a, N> {
    queue: VecDeque<&'a N>,
}

impl<'a, N: AstNode> LevelOrder<'a, N> {
    pub fn new(root: &'a N) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl<'a, N: AstNode> Iterator for LevelOrder<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.child_nodes());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

impl<N: AstNode> FusedIterator for LevelOrder<'_, N> {}

/// Level-order traversal from `root`. Lazy.
#[instrument(level = "trace", skip_all)]
pub fn level_order<N: AstNode>(root: &N) -> LevelOrder<'_, N> {
    trace!("level-order walk started");
    LevelOrder::new(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::ChildNodes;

    struct Node {
        name: char,
        children: Vec<Node>,
    }

    impl AstNode for Node {
        fn child_nodes(&self) -> ChildNodes<'_, Self> {
            ChildNodes::Indexed(&self.children)
        }
    }

    fn n(name: char, children: Vec<Node>) -> Node {
        Node { name, children }
    }

    #[test]
    fn given_small_tree_when_walking_level_order_then_grouped_by_depth() {
        let tree = n('A', vec![n('B', vec![n('D', vec![])]), n('C', vec![])]);
        let order: String = level_order(&tree).map(|node| node.name).collect();
        assert_eq!(order, "ABCD");
    }

    #[test]
    fn given_wide_tree_when_walking_level_order_then_cousins_keep_order() {
        let tree = n(
            'A',
            vec![
                n('B', vec![n('E', vec![]), n('F', vec![])]),
                n('C', vec![]),
                n('D', vec![n('G', vec![])]),
            ],
        );
        let order: String = level_order(&tree).map(|node| node.name).collect();
        assert_eq!(order, "ABCDEFG");
    }
}
