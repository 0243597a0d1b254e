//! Post-order walk using a discover stack and a return stack.

use std::iter::{FusedIterator, Rev};
use std::vec::IntoIter;

use tracing::{instrument, trace};

use crate::domain::node::AstNode;

/// Post-order result: every node after all of its descendants, root last.
///
/// Unlike [`PreOrder`](crate::domain::PreOrder) and
/// [`LevelOrder`](crate::domain::LevelOrder) this is not lazy. The final order
/// is only known once the whole tree has been explored, so [`post_order`]
/// does all the work up front and this type just hands out the buffer.
#[derive(Debug)]
pub struct PostOrder<'a, N> {
    nodes: Rev<IntoIter<&'a N>>,
}

impl<'a, N> Iterator for PostOrder<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<N> DoubleEndedIterator for PostOrder<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.nodes.next_back()
    }
}

impl<N> ExactSizeIterator for PostOrder<'_, N> {}

impl<N> FusedIterator for PostOrder<'_, N> {}

/// Post-order traversal from `root`. Eager: explores the entire tree before
/// returning.
///
/// Nodes popped from the discover stack are pushed on the return stack and
/// their children are pushed on the discover stack in natural order. The
/// rightmost child is discovered first and so sits deeper in the return stack
/// than its left siblings; draining the return stack from the top gives
/// left-to-right post-order.
#[instrument(level = "trace", skip_all)]
pub fn post_order<N: AstNode>(root: &N) -> PostOrder<'_, N> {
    let mut discover = vec![root];
    let mut returned = Vec::new();

    while let Some(node) = discover.pop() {
        returned.push(node);
        discover.extend(node.child_nodes());
    }

    trace!(nodes = returned.len(), "post-order buffered");
    PostOrder {
        nodes: returned.into_iter().rev(),
    }
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
    fn given_small_tree_when_walking_post_order_then_root_is_last() {
        let tree = n('A', vec![n('B', vec![n('D', vec![])]), n('C', vec![])]);
        let order: String = post_order(&tree).map(|node| node.name).collect();
        assert_eq!(order, "DBCA");
    }

    #[test]
    fn given_post_order_when_created_then_length_is_known() {
        let tree = n('A', vec![n('B', vec![]), n('C', vec![n('E', vec![])])]);
        let walk = post_order(&tree);
        assert_eq!(walk.len(), 4);
    }

    #[test]
    fn given_post_order_when_read_backwards_then_root_comes_first() {
        let tree = n('A', vec![n('B', vec![]), n('C', vec![])]);
        let reversed: String = post_order(&tree).rev().map(|node| node.name).collect();
        assert_eq!(reversed, "ACB");
    }
}
