//! Node capability consumed by every traversal.
//!
//! A node only has to expose its children in order. Everything else about the
//! node (kind, token, span, payload) is invisible to this crate.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;

use crate::domain::children::{Children, ReverseChildren};

/// A tree node with an ordered sequence of zero or more children.
///
/// The tree reachable from a root must be finite. `child_nodes` may be called
/// any number of times and must return the same children in the same order
/// each time.
pub trait AstNode: Sized {
    fn child_nodes(&self) -> ChildNodes<'_, Self>;
}

/// Randomly indexable child storage with a known length.
pub trait ChildList<N> {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&N>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N, T: Borrow<N>> ChildList<N> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&N> {
        self.as_slice().get(index).map(Borrow::borrow)
    }
}

impl<N, T: Borrow<N>> ChildList<N> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&N> {
        VecDeque::get(self, index).map(Borrow::borrow)
    }
}

/// Ordered view of a node's children.
///
/// `Indexed` lets traversals walk the children back to front without buffering.
/// `Sequence` is for nodes that can only produce their children once per call;
/// reversing it buffers.
pub enum ChildNodes<'a, N> {
    Indexed(&'a dyn ChildList<N>),
    Sequence(Box<dyn Iterator<Item = &'a N> + 'a>),
}

impl<'a, N> ChildNodes<'a, N> {
    /// A view over no children at all.
    pub fn empty() -> Self {
        ChildNodes::Sequence(Box::new(std::iter::empty()))
    }

    #[cfg(test)]
    fn is_indexed(&self) -> bool {
        matches!(self, ChildNodes::Indexed(_))
    }

    /// Children from last to first.
    pub fn reversed(self) -> ReverseChildren<'a, N> {
        ReverseChildren::new(self)
    }
}

impl<'a, N> IntoIterator for ChildNodes<'a, N> {
    type Item = &'a N;
    type IntoIter = Children<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        Children::new(self)
    }
}

impl<N> fmt::Debug for ChildNodes<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildNodes::Indexed(list) => f.debug_struct("Indexed").field("len", &list.len()).finish(),
            ChildNodes::Sequence(_) => f.write_str("Sequence"),
        }
    }
}

/// Identity of a node: the address of the node value.
///
/// Two structurally equal nodes at different addresses have different ids.
/// The same node reached twice (e.g. one `Rc` pushed under two parents) has
/// one id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn of<N>(node: &N) -> Self {
        NodeId(node as *const N as usize)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node@{:#x}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn given_rc_children_when_viewed_as_child_list_then_derefs_to_node() {
        let a = Rc::new(5u32);
        let children: Vec<Rc<u32>> = vec![Rc::clone(&a), Rc::new(7)];
        let list: &dyn ChildList<u32> = &children;

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&5));
        assert_eq!(list.get(1), Some(&7));
        assert_eq!(list.get(2), None);
        assert!(std::ptr::eq(list.get(0).unwrap(), &*a));
    }

    #[test]
    fn given_vecdeque_children_when_viewed_as_child_list_then_keeps_order() {
        let children: VecDeque<u8> = VecDeque::from(vec![1, 2, 3]);
        let list: &dyn ChildList<u8> = &children;
        assert_eq!(list.get(2), Some(&3));
        assert!(!list.is_empty());
    }

    #[test]
    fn given_same_value_at_two_addresses_when_taking_ids_then_ids_differ() {
        let x = 1u64;
        let y = 1u64;
        assert_ne!(NodeId::of(&x), NodeId::of(&y));
        assert_eq!(NodeId::of(&x), NodeId::of(&x));
    }

    #[test]
    fn given_shared_rc_when_taking_ids_then_ids_match() {
        let shared = Rc::new(String::from("x"));
        let other = Rc::clone(&shared);
        assert_eq!(NodeId::of(&*shared), NodeId::of(&*other));
    }

    #[test]
    fn given_empty_view_when_iterating_then_yields_nothing() {
        let view: ChildNodes<'_, u8> = ChildNodes::empty();
        assert!(!view.is_indexed());
        assert_eq!(view.into_iter().count(), 0);
    }

    #[test]
    fn node_id_display_is_hex_address() {
        let value = 3i32;
        let shown = NodeId::of(&value).to_string();
        assert!(shown.starts_with("node@0x"), "{shown}");
    }
}
