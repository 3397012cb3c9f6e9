//! Node definitions

use super::branch::Branch;
use super::condition::NodeKind;
use serde::{Deserialize, Serialize};

/// One evaluation criterion of the decision tree
///
/// Invariant: within one node, exactly one branch must match any well-formed
/// subject — authors guarantee this with a catch-all branch placed last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node ID within the document
    pub id: String,

    /// Criterion kind; constrains the condition shape of every branch
    pub kind: NodeKind,

    /// Position in the top-level chain; ignored for child nodes
    #[serde(default)]
    pub order: u32,

    /// Possible outcomes, matched in declared order
    pub branches: Vec<Branch>,
}

impl Node {
    /// Create a new node with no branches
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Node {
            id: id.into(),
            kind,
            order: 0,
            branches: Vec::new(),
        }
    }

    /// Set the top-level position
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Append a branch
    pub fn add_branch(mut self, branch: Branch) -> Self {
        self.branches.push(branch);
        self
    }
}
