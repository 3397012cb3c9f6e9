//! Error types for Barème Core

use crate::document::NodeKind;
use thiserror::Error;

/// Document error type
///
/// Every variant is a malformed-document condition: not recoverable locally,
/// surfaced to the tree author at validation time.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("node '{node}' is {} but branch '{branch}' carries a {} condition", .expected.as_str(), .found.as_str())]
    ConditionKindMismatch {
        node: String,
        branch: String,
        expected: NodeKind,
        found: NodeKind,
    },

    #[error("node '{0}' has no branches")]
    EmptyNode(String),

    #[error("branch '{0}' has a commune condition with an empty id list")]
    EmptyIdList(String),

    #[error("branch '{0}' has a social-status condition with an empty status list")]
    EmptyStatusList(String),

    #[error("branch '{0}' has an inverted range (min > max)")]
    InvertedRange(String),

    #[error("tree depth exceeds the {limit}-level limit at node '{node}'")]
    MaxDepthExceeded { node: String, limit: usize },

    #[error("unsupported schema version {0}")]
    UnsupportedSchemaVersion(u32),

    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
