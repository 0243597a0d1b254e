//! A plain syntax node for tree documents and fixtures.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::domain::node::{AstNode, ChildNodes};

/// Syntax node with a kind, optional token text and shared children.
///
/// Equality is structural. Traversals and the parent map use identity, so two
/// equal nodes are still two nodes; the same `Rc` added under two parents is
/// one node with two parents and is rejected by
/// [`parent_map`](crate::domain::parent_map).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Rc<SyntaxNode>>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Rc<SyntaxNode>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Rc<SyntaxNode>>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl AstNode for SyntaxNode {
    fn child_nodes(&self) -> ChildNodes<'_, Self> {
        ChildNodes::Indexed(&self.children)
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} {:?}", self.kind, text),
            None => f.write_str(&self.kind),
        }
    }
}

// Unwinds uniquely owned descendants onto a heap stack so deep chains do not
// recurse through `Rc` drops.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(mut owned) = Rc::try_unwrap(child) {
                pending.append(&mut owned.children);
            }
        }
    }
}
