//! Application layer: tree documents and the walk service
//!
//! This layer loads trees from disk and turns traversals into text.

pub mod document;
pub mod error;
pub mod error_ext;
pub mod services;

pub use document::{load_tree, parse_tree, to_document};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
