//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeId;

/// Domain errors signal that the input is not a proper tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "duplicate parent assignment for node {node}: already a child of {first_parent}, found again under {second_parent}"
    )]
    DuplicateParent {
        node: NodeId,
        first_parent: NodeId,
        second_parent: NodeId,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
