//! Barème Engine - Evaluation engine for tariff decision trees
//!
//! This crate computes a membership-fee price from a tariff's base price, a
//! decision-tree document, and a subject's attributes:
//! - Condition evaluation and branch resolution
//! - The chain walk producing a final price and decision trail
//! - Display-only price bounds
//! - The tree lock/duplicate lifecycle
//!
//! Evaluation is synchronous, stateless, and side-effect-free: `evaluate`
//! and `bounds` are pure functions over their inputs.

pub mod bounds;
pub mod conditions;
pub mod error;
pub mod lifecycle;
pub mod reduction;
pub mod resolver;
pub mod result;
pub mod tariff;
pub mod walker;

// Re-export main types
pub use error::{EngineError, Result};
pub use lifecycle::{DecisionTree, DisplayMode};
pub use result::{EvaluationResult, PriceBounds, TrailStep};
pub use tariff::Tariff;
pub use walker::evaluate;

// Re-export commonly used types from the core crate
pub use bareme_core::{
    Branch, Condition, EvaluationContext, Node, NodeKind, Reduction, TreeDocument,
};
