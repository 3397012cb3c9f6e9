//! Evaluation results and price bounds
//!
//! These structures carry the computed price, the itemized reduction trail
//! consumed by billing, and the display-only price range.

use bareme_core::NodeKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of the evaluation trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailStep {
    /// Kind of the node that was evaluated
    pub node_kind: NodeKind,

    /// Stable key of the branch taken
    pub branch_code: String,

    /// Label of the branch taken
    pub label: String,

    /// Reduction granted at this step, zero when the branch carries none
    pub reduction: Decimal,

    /// Accounting operation the reduction posts to, when linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounting_ref: Option<String>,
}

impl TrailStep {
    /// Create a new trail step
    pub fn new(
        node_kind: NodeKind,
        branch_code: impl Into<String>,
        label: impl Into<String>,
        reduction: Decimal,
    ) -> Self {
        TrailStep {
            node_kind,
            branch_code: branch_code.into(),
            label: label.into(),
            reduction,
            accounting_ref: None,
        }
    }

    /// Set the accounting operation reference
    pub fn with_accounting_ref(mut self, accounting_ref: impl Into<String>) -> Self {
        self.accounting_ref = Some(accounting_ref.into());
        self
    }
}

/// Outcome of one evaluation
///
/// `total_reduction` is the full granted amount, reported unclipped even
/// when the floor at zero absorbs part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Final price, floored at zero
    pub final_price: Decimal,

    /// Sum of all granted reductions
    pub total_reduction: Decimal,

    /// One step per node visited, in evaluation order
    pub trail: Vec<TrailStep>,
}

/// Display-only price range advertised before evaluation
///
/// A conservative estimate: `min` may be lower than any price a real
/// subject can reach. Never used as the authoritative computed price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBounds {
    /// Whether a price falls inside the advertised range
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}
