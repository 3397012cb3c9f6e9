//! Reduction specification carried by a branch

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a reduction amount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionKind {
    /// Literal monetary amount
    Fixed,
    /// Percentage of the tariff's base price
    Percentage,
}

/// Monetary reduction granted by a branch
///
/// Percentage reductions are always computed against the tariff's original
/// base price, never against an already-discounted running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    pub kind: ReductionKind,
    pub amount: Decimal,

    /// Reference to the accounting operation this reduction posts to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounting_ref: Option<String>,
}

impl Reduction {
    /// Create a fixed reduction
    pub fn fixed(amount: Decimal) -> Self {
        Reduction {
            kind: ReductionKind::Fixed,
            amount,
            accounting_ref: None,
        }
    }

    /// Create a percentage-of-base reduction
    pub fn percentage(amount: Decimal) -> Self {
        Reduction {
            kind: ReductionKind::Percentage,
            amount,
            accounting_ref: None,
        }
    }

    /// Set the accounting operation reference
    pub fn with_accounting_ref(mut self, accounting_ref: impl Into<String>) -> Self {
        self.accounting_ref = Some(accounting_ref.into());
        self
    }
}
