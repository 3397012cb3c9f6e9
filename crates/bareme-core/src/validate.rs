//! Document validation
//!
//! Runs on load and on every mutation, before any evaluation is attempted.
//!
//! # Validation Rules
//!
//! - `schema_version` must be a version this library understands
//! - every node carries at least one branch
//! - a branch's condition shape must match its node's kind (`CatchAll` is
//!   valid everywhere)
//! - non-catchall commune conditions need a non-empty id list
//! - `between` ranges need `min <= max`
//! - social-status conditions need a non-empty status list
//! - nesting depth is capped at [`MAX_TREE_DEPTH`]

use crate::document::condition::{AgeTest, CommuneScope, Condition, QfTest};
use crate::document::{Branch, Node, TreeDocument, CURRENT_SCHEMA_VERSION};
use crate::error::{DocumentError, Result};

/// Maximum node nesting depth accepted in a document
pub const MAX_TREE_DEPTH: usize = 32;

/// Validate a whole document
pub fn validate_document(document: &TreeDocument) -> Result<()> {
    if document.schema_version == 0 || document.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(DocumentError::UnsupportedSchemaVersion(
            document.schema_version,
        ));
    }

    for node in &document.nodes {
        validate_node(node, 1)?;
    }
    Ok(())
}

fn validate_node(node: &Node, depth: usize) -> Result<()> {
    if depth > MAX_TREE_DEPTH {
        return Err(DocumentError::MaxDepthExceeded {
            node: node.id.clone(),
            limit: MAX_TREE_DEPTH,
        });
    }

    if node.branches.is_empty() {
        return Err(DocumentError::EmptyNode(node.id.clone()));
    }

    for branch in &node.branches {
        validate_branch(node, branch)?;
        for child in &branch.children {
            validate_node(child, depth + 1)?;
        }
    }
    Ok(())
}

fn validate_branch(node: &Node, branch: &Branch) -> Result<()> {
    if let Some(found) = branch.condition.kind() {
        if found != node.kind {
            return Err(DocumentError::ConditionKindMismatch {
                node: node.id.clone(),
                branch: branch.id.clone(),
                expected: node.kind,
                found,
            });
        }
    }

    match &branch.condition {
        Condition::Commune { scope, ids } => {
            if *scope != CommuneScope::Catchall && ids.is_empty() {
                return Err(DocumentError::EmptyIdList(branch.id.clone()));
            }
        }
        Condition::Age {
            test: AgeTest::Between { min, max },
        } => {
            if min > max {
                return Err(DocumentError::InvertedRange(branch.id.clone()));
            }
        }
        Condition::Qf {
            test: QfTest::Between { min, max },
        } => {
            if min > max {
                return Err(DocumentError::InvertedRange(branch.id.clone()));
            }
        }
        Condition::StatutSocial { statuses, .. } => {
            if statuses.is_empty() {
                return Err(DocumentError::EmptyStatusList(branch.id.clone()));
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::condition::NodeKind;
    use rust_decimal::Decimal;

    fn catchall_branch(id: &str) -> Branch {
        Branch::new(id, "any", "Anyone", Condition::CatchAll)
    }

    #[test]
    fn test_empty_document_is_valid() {
        assert!(validate_document(&TreeDocument::new()).is_ok());
    }

    #[test]
    fn test_unsupported_schema_version() {
        let mut document = TreeDocument::new();
        document.schema_version = 99;
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::UnsupportedSchemaVersion(99))
        ));
    }

    #[test]
    fn test_node_without_branches() {
        let document = TreeDocument::new().add_node(Node::new("n1", NodeKind::Age));
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::EmptyNode(_))
        ));
    }

    #[test]
    fn test_condition_kind_mismatch() {
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::Age).add_branch(Branch::new(
                "b1",
                "bad",
                "Bad",
                Condition::qf(QfTest::IsNull),
            )),
        );
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::ConditionKindMismatch { .. })
        ));
    }

    #[test]
    fn test_catch_all_valid_under_any_kind() {
        let document = TreeDocument::new()
            .add_node(Node::new("n1", NodeKind::Age).add_branch(catchall_branch("b1")))
            .add_node(Node::new("n2", NodeKind::StatutSocial).add_branch(catchall_branch("b2")));
        assert!(validate_document(&document).is_ok());
    }

    #[test]
    fn test_commune_list_needs_ids() {
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::Commune).add_branch(Branch::new(
                "b1",
                "local",
                "Listed communes",
                Condition::commune(CommuneScope::ExplicitList, vec![]),
            )),
        );
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::EmptyIdList(_))
        ));
    }

    #[test]
    fn test_commune_catchall_needs_no_ids() {
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::Commune).add_branch(Branch::new(
                "b1",
                "any",
                "Anywhere",
                Condition::commune(CommuneScope::Catchall, vec![]),
            )),
        );
        assert!(validate_document(&document).is_ok());
    }

    #[test]
    fn test_inverted_age_range() {
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::Age).add_branch(Branch::new(
                "b1",
                "bad",
                "Bad range",
                Condition::age(AgeTest::Between { min: 30, max: 20 }),
            )),
        );
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::InvertedRange(_))
        ));
    }

    #[test]
    fn test_inverted_qf_range() {
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::Qf).add_branch(Branch::new(
                "b1",
                "bad",
                "Bad range",
                Condition::qf(QfTest::Between {
                    min: Decimal::from(800),
                    max: Decimal::from(400),
                }),
            )),
        );
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::InvertedRange(_))
        ));
    }

    #[test]
    fn test_empty_status_list() {
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::StatutSocial).add_branch(Branch::new(
                "b1",
                "bad",
                "Bad",
                Condition::statut_social(vec![], false),
            )),
        );
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::EmptyStatusList(_))
        ));
    }

    #[test]
    fn test_depth_limit() {
        // Build a chain one level past the cap
        let mut node = Node::new("leaf", NodeKind::Age).add_branch(catchall_branch("b-leaf"));
        for i in 0..MAX_TREE_DEPTH {
            node = Node::new(format!("n{}", i), NodeKind::Age).add_branch(
                Branch::new(format!("b{}", i), "any", "Anyone", Condition::CatchAll)
                    .add_child(node),
            );
        }
        let document = TreeDocument::new().add_node(node);

        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::MaxDepthExceeded { .. })
        ));
    }

    #[test]
    fn test_child_nodes_are_validated() {
        let bad_child = Node::new("n2", NodeKind::Qf); // no branches
        let document = TreeDocument::new().add_node(
            Node::new("n1", NodeKind::Commune)
                .add_branch(catchall_branch("b1").add_child(bad_child)),
        );
        assert!(matches!(
            validate_document(&document),
            Err(DocumentError::EmptyNode(_))
        ));
    }
}
