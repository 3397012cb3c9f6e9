//! Branch definitions

use super::condition::Condition;
use super::node::Node;
use super::reduction::Reduction;
use serde::{Deserialize, Serialize};

/// One possible outcome of a node's criterion
///
/// A branch may carry a reduction and may open a private sub-chain of finer
/// criteria (`children`) that runs before the outer chain resumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Unique branch ID within the document
    pub id: String,

    /// Stable key reported in the evaluation trail
    pub code: String,

    /// Human-readable label
    pub label: String,

    /// Condition a subject must satisfy to take this branch
    pub condition: Condition,

    /// Reduction granted when this branch is taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction: Option<Reduction>,

    /// Sub-chain of nodes scoped to this branch only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Branch {
    /// Create a new branch
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        label: impl Into<String>,
        condition: Condition,
    ) -> Self {
        Branch {
            id: id.into(),
            code: code.into(),
            label: label.into(),
            condition,
            reduction: None,
            children: Vec::new(),
        }
    }

    /// Set the reduction
    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = Some(reduction);
        self
    }

    /// Append a child node to this branch's sub-chain
    pub fn add_child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::condition::{AgeTest, NodeKind};
    use rust_decimal::Decimal;

    #[test]
    fn test_branch_creation() {
        let branch = Branch::new("b1", "minor", "Under 18", Condition::age(AgeTest::Lt { value: 18 }));

        assert_eq!(branch.id, "b1");
        assert_eq!(branch.code, "minor");
        assert!(branch.reduction.is_none());
        assert!(branch.children.is_empty());
    }

    #[test]
    fn test_branch_with_children() {
        let child = Node::new("n2", NodeKind::Age)
            .add_branch(Branch::new("b2", "any", "Any age", Condition::CatchAll));

        let branch = Branch::new("b1", "local", "In commune", Condition::CatchAll)
            .with_reduction(Reduction::fixed(Decimal::from(5)))
            .add_child(child);

        assert_eq!(branch.children.len(), 1);
        assert!(branch.reduction.is_some());
    }

    #[test]
    fn test_optional_fields_absent_from_json() {
        let branch = Branch::new("b1", "any", "Anyone", Condition::CatchAll);
        let json = serde_json::to_string(&branch).unwrap();
        assert!(!json.contains("reduction"));
        assert!(!json.contains("children"));
    }
}
