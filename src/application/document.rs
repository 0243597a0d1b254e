//! Tree documents: a `SyntaxNode` tree serialized as TOML.
//!
//! ```toml
//! kind = "call"
//! text = "SUM"
//!
//! [[children]]
//! kind = "ref"
//! text = "A1"
//! ```

use std::fs;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::SyntaxNode;

/// Reads the tree document at `path`.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> ApplicationResult<Rc<SyntaxNode>> {
    let content = fs::read_to_string(path).with_path_context("read", path)?;
    parse_tree(&content, &path.display().to_string())
}

/// Parses a tree document held in memory. `origin` names it in errors.
pub fn parse_tree(content: &str, origin: &str) -> ApplicationResult<Rc<SyntaxNode>> {
    let root: SyntaxNode = toml::from_str(content).map_err(|e| ApplicationError::Parse {
        origin: origin.to_string(),
        message: e.message().to_string(),
    })?;
    debug!("parsed tree document {}: root kind {}", origin, root.kind);
    Ok(Rc::new(root))
}

/// Serializes `root` back into a tree document.
pub fn to_document(root: &SyntaxNode) -> ApplicationResult<String> {
    toml::to_string(root).map_err(|e| ApplicationError::Serialize {
        kind: root.kind.clone(),
        message: e.to_string(),
    })
}
