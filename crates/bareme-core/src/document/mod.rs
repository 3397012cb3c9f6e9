//! Decision-tree document model
//!
//! A document is the serialized form of one decision tree: an ordered list
//! of top-level nodes, each node a criterion with branches, each branch
//! optionally opening a sub-chain of child nodes. Documents round-trip
//! exactly through JSON.

pub mod branch;
pub mod condition;
pub mod node;
pub mod reduction;

pub use branch::Branch;
pub use condition::{AgeTest, CommuneScope, Condition, NodeKind, QfTest, ThresholdOp};
pub use node::Node;
pub use reduction::{Reduction, ReductionKind};

use crate::error::Result;
use crate::validate;
use serde::{Deserialize, Serialize};

/// Schema version written by this library
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Serialized decision-tree document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeDocument {
    /// Format version, for forward compatibility
    pub schema_version: u32,

    /// Top-level nodes; evaluated in `order`
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl TreeDocument {
    /// Create an empty document at the current schema version
    pub fn new() -> Self {
        TreeDocument {
            schema_version: CURRENT_SCHEMA_VERSION,
            nodes: Vec::new(),
        }
    }

    /// Append a top-level node
    pub fn add_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Parse a document from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let document: TreeDocument = serde_json::from_str(json)?;
        validate::validate_document(&document)?;
        Ok(document)
    }

    /// Serialize the document to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Top-level nodes in evaluation order
    ///
    /// Sorts by `order`, preserving declaration order for ties.
    pub fn sorted_nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.nodes.iter().collect();
        nodes.sort_by_key(|n| n.order);
        nodes
    }

    /// Whether the document has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum node nesting depth
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(node_depth).max().unwrap_or(0)
    }
}

impl Default for TreeDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn node_depth(node: &Node) -> usize {
    1 + node
        .branches
        .iter()
        .flat_map(|b| b.children.iter())
        .map(node_depth)
        .max()
        .unwrap_or(0)
}
