//! Order selection and the `Traverse` extension trait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainResult;
use crate::domain::levelorder::{level_order, LevelOrder};
use crate::domain::node::AstNode;
use crate::domain::parents::{parent_map, ParentMap};
use crate::domain::postorder::{post_order, PostOrder};
use crate::domain::preorder::{pre_order, PreOrder};

/// The three traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    #[default]
    Pre,
    Post,
    Level,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [TraversalOrder::Pre, TraversalOrder::Post, TraversalOrder::Level];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::Pre => "pre",
            TraversalOrder::Post => "post",
            TraversalOrder::Level => "level",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(TraversalOrder::Pre),
            "post" | "postorder" | "post-order" => Ok(TraversalOrder::Post),
            "level" | "levelorder" | "level-order" | "bfs" => Ok(TraversalOrder::Level),
            other => Err(format!("unknown traversal order: {other}")),
        }
    }
}

/// One of the three traversals behind a single iterator type.
///
/// Keeps the character of the chosen order: `Pre` and `Level` stay lazy,
/// `Post` was computed up front.
#[derive(Debug)]
pub enum Walk<'a, N> {
    Pre(PreOrder<'a, N>),
    Post(PostOrder<'a, N>),
    Level(LevelOrder<'a, N>),
}

impl<'a, N: AstNode> Iterator for Walk<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Walk::Pre(iter) => iter.next(),
            Walk::Post(iter) => iter.next(),
            Walk::Level(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Walk::Pre(iter) => iter.size_hint(),
            Walk::Post(iter) => iter.size_hint(),
            Walk::Level(iter) => iter.size_hint(),
        }
    }
}

/// Traverses `root` in the given order.
pub fn walk<N: AstNode>(root: &N, order: TraversalOrder) -> Walk<'_, N> {
    match order {
        TraversalOrder::Pre => Walk::Pre(pre_order(root)),
        TraversalOrder::Post => Walk::Post(post_order(root)),
        TraversalOrder::Level => Walk::Level(level_order(root)),
    }
}

/// Method syntax for the traversals, available on every [`AstNode`].
pub trait Traverse: AstNode {
    fn all_nodes(&self) -> PreOrder<'_, Self> {
        pre_order(self)
    }

    fn pre_order(&self) -> PreOrder<'_, Self> {
        pre_order(self)
    }

    /// Eager, see [`post_order`].
    fn post_order(&self) -> PostOrder<'_, Self> {
        post_order(self)
    }

    fn level_order(&self) -> LevelOrder<'_, Self> {
        level_order(self)
    }

    fn parents(&self) -> DomainResult<ParentMap<'_, Self>> {
        parent_map(self)
    }

    fn walk(&self, order: TraversalOrder) -> Walk<'_, Self> {
        walk(self, order)
    }
}

impl<N: AstNode> Traverse for N {}
