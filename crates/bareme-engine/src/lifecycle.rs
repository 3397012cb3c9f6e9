//! Tree lifecycle
//!
//! A decision tree is editable until locked. A locked tree is immutable
//! forever — it is the historical record that keeps past-computed prices
//! reproducible. Any further edit goes through `duplicate`, which deep-copies
//! the document into a fresh unlocked tree and leaves the original untouched.

use crate::bounds;
use crate::error::{EngineError, Result};
use crate::result::{EvaluationResult, PriceBounds};
use crate::walker;
use bareme_core::{validate, EvaluationContext, TreeDocument};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which bound the UI advertises before evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Advertise the best-case (most discounted) price
    Minimum,
    /// Advertise the worst-case (no discount) price
    Maximum,
}

/// Versioned decision tree bound to one tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    id: Uuid,
    display_mode: DisplayMode,
    locked: bool,
    document: TreeDocument,
}

impl DecisionTree {
    /// Create a new unlocked tree with an empty document
    pub fn new(display_mode: DisplayMode) -> Self {
        let tree = DecisionTree {
            id: Uuid::new_v4(),
            display_mode,
            locked: false,
            document: TreeDocument::new(),
        };
        tracing::info!(tree = %tree.id, "created decision tree");
        tree
    }

    /// Tree identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Which bound the UI advertises
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Whether the tree is locked
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The tree's document
    pub fn document(&self) -> &TreeDocument {
        &self.document
    }

    /// Lock the tree, making it immutable
    pub fn lock(&mut self) {
        if !self.locked {
            self.locked = true;
            tracing::info!(tree = %self.id, "locked decision tree");
        }
    }

    /// Change the advertised bound
    pub fn set_display_mode(&mut self, display_mode: DisplayMode) -> Result<()> {
        if self.locked {
            return Err(EngineError::TreeLocked { tree: self.id });
        }
        self.display_mode = display_mode;
        Ok(())
    }

    /// Apply an edit to the document
    ///
    /// The edit runs on a copy which is validated before being committed,
    /// so a rejected edit leaves the document untouched.
    pub fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut TreeDocument),
    {
        if self.locked {
            return Err(EngineError::TreeLocked { tree: self.id });
        }

        let mut draft = self.document.clone();
        f(&mut draft);
        validate::validate_document(&draft)?;
        self.document = draft;
        Ok(())
    }

    /// Replace the whole document
    pub fn replace_document(&mut self, document: TreeDocument) -> Result<()> {
        if self.locked {
            return Err(EngineError::TreeLocked { tree: self.id });
        }
        validate::validate_document(&document)?;
        self.document = document;
        Ok(())
    }

    /// Deep-copy a locked tree into a fresh unlocked one
    ///
    /// Only valid on a locked tree; the copy shares no identity with the
    /// original, which stays untouched.
    pub fn duplicate(&self) -> Result<DecisionTree> {
        if !self.locked {
            return Err(EngineError::TreeNotLocked { tree: self.id });
        }

        let copy = DecisionTree {
            id: Uuid::new_v4(),
            display_mode: self.display_mode,
            locked: false,
            document: self.document.clone(),
        };
        tracing::info!(source = %self.id, copy = %copy.id, "duplicated locked tree");
        Ok(copy)
    }

    /// Evaluate this tree against a subject
    pub fn evaluate(
        &self,
        base_price: Decimal,
        ctx: &EvaluationContext,
    ) -> Result<EvaluationResult> {
        walker::evaluate(&self.document, base_price, ctx)
    }

    /// Price range this tree can produce
    pub fn bounds(&self, base_price: Decimal) -> PriceBounds {
        bounds::bounds(&self.document, base_price)
    }

    /// The bound the UI advertises, per `display_mode`
    pub fn advertised_price(&self, base_price: Decimal) -> Decimal {
        let b = self.bounds(base_price);
        match self.display_mode {
            DisplayMode::Minimum => b.min,
            DisplayMode::Maximum => b.max,
        }
    }
}
