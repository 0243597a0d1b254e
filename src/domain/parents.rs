//! Child → parent lookup derived from a tree.

use std::collections::hash_map::{Entry, HashMap};
use std::iter::FusedIterator;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{AstNode, NodeId};
use crate::domain::preorder::{all_nodes, pre_order};

/// Parent of every node reachable from a root, keyed by node identity.
///
/// The root has no entry. The map borrows the tree and is a snapshot: it is
/// not updated if the tree changes.
#[derive(Debug)]
pub struct ParentMap<'a, N> {
    root: &'a N,
    parents: HashMap<NodeId, &'a N>,
}

impl<'a, N> ParentMap<'a, N> {
    pub fn root(&self) -> &'a N {
        self.root
    }

    pub fn parent_of(&self, node: &N) -> Option<&'a N> {
        self.parents.get(&NodeId::of(node)).copied()
    }

    /// True when `node` is a non-root node of this tree.
    pub fn contains(&self, node: &N) -> bool {
        self.parents.contains_key(&NodeId::of(node))
    }

    /// Number of entries, i.e. the node count minus the root.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// `(child, parent)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &'a N)> + '_ {
        self.parents.iter().map(|(id, parent)| (*id, *parent))
    }

    /// Parent, grandparent, … up to and including the root. Empty for the root
    /// and for nodes not in the tree.
    pub fn ancestors(&self, node: &N) -> Ancestors<'_, 'a, N> {
        Ancestors {
            map: self,
            next: self.parent_of(node),
        }
    }

    /// Distance from the root. The root and unknown nodes are at depth 0.
    pub fn depth_of(&self, node: &N) -> usize {
        self.ancestors(node).count()
    }
}

impl<'a, N: AstNode> ParentMap<'a, N> {
    /// Depth of every node in the tree, root at 0, computed in one pre-order
    /// pass. Prefer this over repeated [`ParentMap::depth_of`] calls, which
    /// each walk the whole ancestor chain.
    pub fn depths(&self) -> HashMap<NodeId, usize> {
        let mut depths: HashMap<NodeId, usize> = HashMap::with_capacity(self.parents.len() + 1);
        for node in pre_order(self.root) {
            let depth = self
                .parent_of(node)
                .and_then(|parent| depths.get(&NodeId::of(parent)))
                .map_or(0, |parent_depth| parent_depth + 1);
            depths.insert(NodeId::of(node), depth);
        }
        depths
    }
}

/// Iterator walking up the parent chain.
pub struct Ancestors<'m, 'a, N> {
    map: &'m ParentMap<'a, N>,
    next: Option<&'a N>,
}

impl<'a, N> Iterator for Ancestors<'_, 'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.map.parent_of(current);
        Some(current)
    }
}

impl<N> FusedIterator for Ancestors<'_, '_, N> {}

/// Builds the parent map for the tree under `root`.
///
/// Fails with [`DomainError::DuplicateParent`] as soon as a node turns up as
/// a child a second time, whether under another parent or twice under the
/// same one. No partial map is returned. A cycle also re-inserts a child, so
/// cyclic input ends in the same error instead of looping.
#[instrument(level = "debug", skip_all)]
pub fn parent_map<N: AstNode>(root: &N) -> DomainResult<ParentMap<'_, N>> {
    let mut parents = HashMap::new();

    for node in all_nodes(root) {
        for child in node.child_nodes() {
            match parents.entry(NodeId::of(child)) {
                Entry::Occupied(existing) => {
                    let err = DomainError::DuplicateParent {
                        node: *existing.key(),
                        first_parent: NodeId::of(*existing.get()),
                        second_parent: NodeId::of(node),
                    };
                    debug!("{}", err);
                    return Err(err);
                }
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }
        }
    }

    debug!(entries = parents.len(), "parent map built");
    Ok(ParentMap { root, parents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::ChildNodes;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Node {
        name: char,
        children: Vec<Rc<Node>>,
    }

    impl AstNode for Node {
        fn child_nodes(&self) -> ChildNodes<'_, Self> {
            ChildNodes::Indexed(&self.children)
        }
    }

    fn n(name: char, children: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node { name, children })
    }

    #[test]
    fn given_tree_when_building_parent_map_then_every_child_points_up() {
        let d = n('D', vec![]);
        let b = n('B', vec![Rc::clone(&d)]);
        let c = n('C', vec![]);
        let a = n('A', vec![Rc::clone(&b), Rc::clone(&c)]);

        let map = parent_map(&*a).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.parent_of(&b).map(|p| p.name), Some('A'));
        assert_eq!(map.parent_of(&c).map(|p| p.name), Some('A'));
        assert_eq!(map.parent_of(&d).map(|p| p.name), Some('B'));
        assert!(map.parent_of(&a).is_none());
        assert!(!map.contains(&a));
        assert!(std::ptr::eq(map.root(), &*a));
    }

    #[test]
    fn given_deep_node_when_listing_ancestors_then_nearest_first() {
        let d = n('D', vec![]);
        let b = n('B', vec![Rc::clone(&d)]);
        let a = n('A', vec![Rc::clone(&b)]);

        let map = parent_map(&*a).unwrap();
        let chain: String = map.ancestors(&d).map(|p| p.name).collect();

        assert_eq!(chain, "BA");
        assert_eq!(map.depth_of(&d), 2);
        assert_eq!(map.depth_of(&a), 0);
    }

    #[test]
    fn given_tree_when_computing_depths_then_match_depth_of() {
        let d = n('D', vec![]);
        let b = n('B', vec![Rc::clone(&d)]);
        let c = n('C', vec![]);
        let a = n('A', vec![Rc::clone(&b), Rc::clone(&c)]);

        let map = parent_map(&*a).unwrap();
        let depths = map.depths();

        assert_eq!(depths.len(), 4);
        for node in [&a, &b, &c, &d] {
            assert_eq!(depths[&NodeId::of(&**node)], map.depth_of(node), "{}", node.name);
        }
    }

    #[test]
    fn given_child_listed_twice_under_one_parent_when_building_then_fails() {
        let x = n('X', vec![]);
        let a = n('A', vec![Rc::clone(&x), Rc::clone(&x)]);

        let err = parent_map(&*a).unwrap_err();

        let DomainError::DuplicateParent {
            node,
            first_parent,
            second_parent,
        } = err;
        assert_eq!(node, NodeId::of(&*x));
        assert_eq!(first_parent, NodeId::of(&*a));
        assert_eq!(second_parent, NodeId::of(&*a));
    }

    #[test]
    fn given_leaf_root_when_building_then_map_is_empty() {
        let a = n('A', vec![]);
        let map = parent_map(&*a).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }
}
