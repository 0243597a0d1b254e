//! Non-recursive traversals over abstract syntax trees.
//!
//! Any type implementing [`AstNode`] (one method: its ordered children) gets
//! pre-order, post-order and level-order walks plus a child → parent map. None
//! of them recurse, so trees of any depth are safe.
//!
//! ```
//! use astwalk::{SyntaxNode, Traverse};
//!
//! let tree = SyntaxNode::new("A")
//!     .with_child(SyntaxNode::new("B").with_child(SyntaxNode::new("D")))
//!     .with_child(SyntaxNode::new("C"));
//!
//! let pre: Vec<String> = tree.pre_order().map(|n| n.kind.clone()).collect();
//! assert_eq!(pre, ["A", "B", "D", "C"]);
//!
//! let post: Vec<String> = tree.post_order().map(|n| n.kind.clone()).collect();
//! assert_eq!(post, ["D", "B", "C", "A"]);
//!
//! let parents = tree.parents().unwrap();
//! assert_eq!(parents.len(), 3);
//! ```
//!
//! `pre_order` and `level_order` are lazy; `post_order` and `parent_map`
//! explore the whole tree before returning.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    all_nodes, level_order, parent_map, post_order, pre_order, walk, AstNode, ChildList, ChildNodes,
    DomainError, DomainResult, LevelOrder, NodeId, ParentMap, PostOrder, PreOrder, SyntaxNode,
    TraversalOrder, Traverse, Walk,
};
pub use tree_traits::ToTermTree;
