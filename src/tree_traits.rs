/*
Rendering any AstNode as a termtree without recursion.

termtree builds a tree from its leaves upwards, which is exactly the order
post_order hands out nodes: when a node comes up, the trees of all its
children are the topmost entries of the work stack, leftmost child deepest.

A termtree::Tree is nested as deep as the AST it came from and its drop glue
recurses, so deep trees must go through `dismantle` (or `to_term_string`,
which does so) instead of being dropped directly.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{post_order, AstNode};

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;

    /// Box-drawing rendering; the intermediate tree is dismantled afterwards.
    fn to_term_string(&self) -> String {
        let tree = self.to_term_tree();
        let rendered = tree.to_string();
        dismantle(tree);
        rendered
    }
}

/// Drops `tree` level by level from a heap stack, so depth does not matter.
pub fn dismantle<D: Display>(tree: Tree<D>) {
    let mut pending = vec![tree];
    while let Some(mut tree) = pending.pop() {
        pending.append(&mut tree.leaves);
    }
}

impl<N: AstNode + Display> ToTermTree for N {
    #[instrument(level = "debug", skip_all)]
    fn to_term_tree(&self) -> Tree<String> {
        let mut built: Vec<Tree<String>> = Vec::new();

        for node in post_order(self) {
            let arity = node.child_nodes().into_iter().count();
            let leaves = built.split_off(built.len() - arity);
            built.push(Tree::new(node.to_string()).with_leaves(leaves));
        }

        // post_order always yields the root last
        built.pop().unwrap_or_else(|| Tree::new(self.to_string()))
    }
}
