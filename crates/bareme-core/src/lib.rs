//! Barème Core - Document model for the Barème tariff decision-tree engine
//!
//! This crate provides the types shared across the Barème ecosystem:
//! - The decision-tree document model (nodes, branches, conditions, reductions)
//! - The evaluation context describing a subject
//! - Document validation
//! - Error types

pub mod context;
pub mod document;
pub mod error;
pub mod validate;

// Re-export commonly used types
pub use context::EvaluationContext;
pub use document::{
    AgeTest, Branch, CommuneScope, Condition, Node, NodeKind, QfTest, Reduction, ReductionKind,
    ThresholdOp, TreeDocument,
};
pub use error::DocumentError;
