//! Branch resolution
//!
//! Picks the single applicable branch of a node: first declared branch whose
//! condition matches. A node whose branches do not cover the subject is an
//! authoring defect and fails loudly — defaulting silently would corrupt a
//! billing computation.

use crate::conditions;
use crate::error::{EngineError, Result};
use bareme_core::{Branch, DocumentError, EvaluationContext, Node};

/// Resolve the branch a subject takes at a node
pub fn resolve<'a>(node: &'a Node, ctx: &EvaluationContext) -> Result<&'a Branch> {
    for branch in &node.branches {
        if let Some(found) = branch.condition.kind() {
            if found != node.kind {
                return Err(EngineError::Document(DocumentError::ConditionKindMismatch {
                    node: node.id.clone(),
                    branch: branch.id.clone(),
                    expected: node.kind,
                    found,
                }));
            }
        }

        if conditions::matches(&branch.condition, ctx) {
            tracing::debug!(node = %node.id, branch = %branch.code, "branch matched");
            return Ok(branch);
        }
    }

    Err(EngineError::NoMatchingBranch {
        node: node.id.clone(),
        kind: node.kind,
    })
}
