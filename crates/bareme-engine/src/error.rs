//! Engine error types

use bareme_core::{DocumentError, NodeKind};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Engine error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Totality violated: a node's branches do not cover the subject.
    /// An authoring defect — the engine never picks a branch by default.
    #[error("no branch of node '{node}' ({}) matches the subject", .kind.as_str())]
    NoMatchingBranch { node: String, kind: NodeKind },

    /// Mutation attempted on a locked tree
    #[error("decision tree {tree} is locked; duplicate it to edit")]
    TreeLocked { tree: Uuid },

    /// Duplication attempted on a tree that is still editable
    #[error("decision tree {tree} is not locked; only a locked tree may be duplicated")]
    TreeNotLocked { tree: Uuid },

    /// Tariff base price below zero
    #[error("base price {0} is negative")]
    InvalidBasePrice(Decimal),

    /// Malformed document
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
