//! Domain layer: the node capability and the traversals over it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod children;
pub mod error;
pub mod levelorder;
pub mod node;
pub mod parents;
pub mod postorder;
pub mod preorder;
pub mod syntax;
pub mod traverse;

pub use children::{Children, ReverseChildren};
pub use error::{DomainError, DomainResult};
pub use levelorder::{level_order, LevelOrder};
pub use node::{AstNode, ChildList, ChildNodes, NodeId};
pub use parents::{parent_map, Ancestors, ParentMap};
pub use postorder::{post_order, PostOrder};
pub use preorder::{all_nodes, pre_order, PreOrder};
pub use syntax::SyntaxNode;
pub use traverse::{walk, TraversalOrder, Traverse, Walk};
