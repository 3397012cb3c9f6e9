//! Tariff aggregate
//!
//! A tariff is a membership fee's base price. It owns at most one active
//! decision tree, created lazily the first time an author configures
//! discounts for it.

use crate::error::{EngineError, Result};
use crate::lifecycle::{DecisionTree, DisplayMode};
use crate::result::{EvaluationResult, PriceBounds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership fee with its optional discount tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    id: Uuid,
    label: String,
    base_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tree: Option<DecisionTree>,
}

impl Tariff {
    /// Create a tariff
    pub fn new(label: impl Into<String>, base_price: Decimal) -> Result<Self> {
        if base_price < Decimal::ZERO {
            return Err(EngineError::InvalidBasePrice(base_price));
        }
        Ok(Tariff {
            id: Uuid::new_v4(),
            label: label.into(),
            base_price,
            tree: None,
        })
    }

    /// Tariff identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Base price before any discount
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// The active decision tree, if one was created
    pub fn tree(&self) -> Option<&DecisionTree> {
        self.tree.as_ref()
    }

    /// The active decision tree, creating an empty unlocked one on first use
    pub fn tree_or_create(&mut self, display_mode: DisplayMode) -> &mut DecisionTree {
        self.tree
            .get_or_insert_with(|| DecisionTree::new(display_mode))
    }

    /// Replace the active tree with a new version (after duplicate-then-edit)
    pub fn replace_tree(&mut self, tree: DecisionTree) {
        self.tree = Some(tree);
    }

    /// Evaluate this tariff for a subject
    ///
    /// Without a tree the full base price applies and the trail is empty.
    pub fn evaluate(
        &self,
        ctx: &bareme_core::EvaluationContext,
    ) -> Result<EvaluationResult> {
        match &self.tree {
            Some(tree) => tree.evaluate(self.base_price, ctx),
            None => Ok(EvaluationResult {
                final_price: self.base_price,
                total_reduction: Decimal::ZERO,
                trail: Vec::new(),
            }),
        }
    }

    /// Price range this tariff can produce
    pub fn bounds(&self) -> PriceBounds {
        match &self.tree {
            Some(tree) => tree.bounds(self.base_price),
            None => PriceBounds {
                min: self.base_price,
                max: self.base_price,
            },
        }
    }

    /// The price the UI advertises before evaluation
    pub fn advertised_price(&self) -> Decimal {
        match &self.tree {
            Some(tree) => tree.advertised_price(self.base_price),
            None => self.base_price,
        }
    }
}
