//! Walk service
//!
//! Turns traversals of a tree into lines of text.

use std::fmt::Display;

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{parent_map, walk, AstNode, NodeId, TraversalOrder};
use crate::tree_traits::ToTermTree;

/// Service rendering traversals according to [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct WalkService {
    settings: Settings,
}

impl WalkService {
    /// Create a new walk service.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Labels of all nodes in `order` (or the configured order).
    ///
    /// With indentation enabled each label is prefixed by its depth times the
    /// indent width. Depths come from the parent map, so a shared node fails
    /// here even though the plain walk would succeed.
    #[instrument(level = "debug", skip(self, root))]
    pub fn walk<N: AstNode + Display>(&self, root: &N, order: Option<TraversalOrder>) -> ApplicationResult<Vec<String>> {
        let order = order.unwrap_or(self.settings.order);
        debug!("walk: order={}", order);

        if !self.settings.indent {
            return Ok(walk(root, order).map(|node| node.to_string()).collect());
        }

        let depths = parent_map(root)?.depths();
        let width = self.settings.indent_width;
        Ok(walk(root, order)
            .map(|node| {
                let pad = depths.get(&NodeId::of(node)).copied().unwrap_or(0) * width;
                format!("{:pad$}{}", "", node, pad = pad)
            })
            .collect())
    }

    /// [`WalkService::walk`] joined with the configured separator.
    pub fn render_walk<N: AstNode + Display>(&self, root: &N, order: Option<TraversalOrder>) -> ApplicationResult<String> {
        Ok(self.walk(root, order)?.join(&self.settings.separator))
    }

    /// `(child, parent)` labels, children in pre-order.
    #[instrument(level = "debug", skip_all)]
    pub fn parents<N: AstNode + Display>(&self, root: &N) -> ApplicationResult<Vec<(String, String)>> {
        let parents = parent_map(root)?;
        let pairs = walk(root, TraversalOrder::Pre)
            .filter_map(|node| parents.parent_of(node).map(|parent| (node.to_string(), parent.to_string())))
            .collect();
        Ok(pairs)
    }

    /// Box-drawing rendering of the whole tree.
    pub fn render_tree<N: AstNode + Display>(&self, root: &N) -> String {
        root.to_term_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SyntaxNode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tree() -> SyntaxNode {
        SyntaxNode::new("A")
            .with_child(SyntaxNode::new("B").with_child(SyntaxNode::new("D")))
            .with_child(SyntaxNode::new("C"))
    }

    #[rstest]
    #[case(TraversalOrder::Pre, ["A", "B", "D", "C"])]
    #[case(TraversalOrder::Post, ["D", "B", "C", "A"])]
    #[case(TraversalOrder::Level, ["A", "B", "C", "D"])]
    fn given_order_when_walking_then_labels_in_that_order(
        tree: SyntaxNode,
        #[case] order: TraversalOrder,
        #[case] expected: [&str; 4],
    ) {
        let service = WalkService::default();
        assert_eq!(service.walk(&tree, Some(order)).unwrap(), expected);
    }

    #[rstest]
    fn given_no_order_when_walking_then_configured_order_used(tree: SyntaxNode) {
        let service = WalkService::new(Settings {
            order: TraversalOrder::Level,
            ..Settings::default()
        });
        assert_eq!(service.walk(&tree, None).unwrap(), ["A", "B", "C", "D"]);
    }

    #[rstest]
    fn given_indent_when_walking_then_labels_padded_by_depth(tree: SyntaxNode) {
        let service = WalkService::new(Settings {
            indent: true,
            indent_width: 3,
            ..Settings::default()
        });
        assert_eq!(
            service.walk(&tree, Some(TraversalOrder::Pre)).unwrap(),
            ["A", "   B", "      D", "   C"]
        );
    }

    #[rstest]
    fn given_separator_when_rendering_then_joined(tree: SyntaxNode) {
        let service = WalkService::new(Settings {
            separator: " ".into(),
            ..Settings::default()
        });
        assert_eq!(service.render_walk(&tree, Some(TraversalOrder::Post)).unwrap(), "D B C A");
    }

    #[rstest]
    fn given_tree_when_listing_parents_then_pairs_in_pre_order(tree: SyntaxNode) {
        let service = WalkService::default();
        let pairs = service.parents(&tree).unwrap();
        let pairs: Vec<(&str, &str)> = pairs.iter().map(|(c, p)| (c.as_str(), p.as_str())).collect();
        assert_eq!(pairs, [("B", "A"), ("D", "B"), ("C", "A")]);
    }

    #[rstest]
    fn given_tree_when_rendering_then_root_first_line(tree: SyntaxNode) {
        let rendered = WalkService::default().render_tree(&tree);
        assert_eq!(rendered.lines().next(), Some("A"));
        assert_eq!(rendered.lines().count(), 4);
    }
}
