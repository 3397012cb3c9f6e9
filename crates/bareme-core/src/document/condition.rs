//! Condition types for branch matching
//!
//! Each node kind implies one condition shape. The shape is made explicit as
//! an internally tagged union so that a malformed document fails at load
//! time, never mid-evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Evaluation criterion carried by a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// Residence commune / community membership
    Commune,
    /// Age in whole years
    Age,
    /// Means-tested index (quotient familial)
    Qf,
    /// Years of continuous membership
    Fidelite,
    /// Number of registrants in the household
    MultiInscriptions,
    /// Social status code
    StatutSocial,
}

impl NodeKind {
    /// Wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Commune => "COMMUNE",
            NodeKind::Age => "AGE",
            NodeKind::Qf => "QF",
            NodeKind::Fidelite => "FIDELITE",
            NodeKind::MultiInscriptions => "MULTI_INSCRIPTIONS",
            NodeKind::StatutSocial => "STATUT_SOCIAL",
        }
    }
}

/// How a commune condition selects residences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuneScope {
    /// Subject's resolved community membership intersects `ids`
    Community,
    /// Subject's residence id is listed in `ids`
    ExplicitList,
    /// Matches any residence
    Catchall,
}

/// Numeric test over the subject's age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AgeTest {
    Lt { value: u32 },
    Lte { value: u32 },
    Gt { value: u32 },
    Gte { value: u32 },
    Eq { value: u32 },
    /// Inclusive on both ends
    Between { min: u32, max: u32 },
}

/// Numeric test over the subject's means-tested index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QfTest {
    Lt { value: Decimal },
    Lte { value: Decimal },
    Gt { value: Decimal },
    Gte { value: Decimal },
    /// Inclusive on both ends
    Between { min: Decimal, max: Decimal },
    /// Matches iff the subject has no means-tested index
    IsNull,
}

/// Threshold operator for loyalty / household-count tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdOp {
    Gte,
    Gt,
    Eq,
}

/// Branch condition, tagged by the node kind it belongs to
///
/// `CatchAll` is the universal default branch: it matches unconditionally
/// and is valid under every node kind, guaranteeing totality wherever the
/// author places it last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// Matches any subject regardless of node kind
    CatchAll,

    Commune {
        scope: CommuneScope,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        ids: Vec<String>,
    },

    Age {
        #[serde(flatten)]
        test: AgeTest,
    },

    Qf {
        #[serde(flatten)]
        test: QfTest,
    },

    Fidelite {
        op: ThresholdOp,
        years: u32,
    },

    MultiInscriptions {
        op: ThresholdOp,
        count: u32,
    },

    StatutSocial {
        statuses: Vec<String>,
        #[serde(default)]
        inverse: bool,
    },
}

impl Condition {
    /// The node kind this condition is shaped for, `None` for `CatchAll`
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Condition::CatchAll => None,
            Condition::Commune { .. } => Some(NodeKind::Commune),
            Condition::Age { .. } => Some(NodeKind::Age),
            Condition::Qf { .. } => Some(NodeKind::Qf),
            Condition::Fidelite { .. } => Some(NodeKind::Fidelite),
            Condition::MultiInscriptions { .. } => Some(NodeKind::MultiInscriptions),
            Condition::StatutSocial { .. } => Some(NodeKind::StatutSocial),
        }
    }

    /// Whether this condition may appear under a node of the given kind
    pub fn applies_to(&self, kind: NodeKind) -> bool {
        match self.kind() {
            None => true,
            Some(own) => own == kind,
        }
    }

    /// Whether this condition matches unconditionally
    pub fn is_catchall(&self) -> bool {
        matches!(
            self,
            Condition::CatchAll
                | Condition::Commune {
                    scope: CommuneScope::Catchall,
                    ..
                }
        )
    }

    /// Build an age condition
    pub fn age(test: AgeTest) -> Self {
        Condition::Age { test }
    }

    /// Build a means-tested-index condition
    pub fn qf(test: QfTest) -> Self {
        Condition::Qf { test }
    }

    /// Build a commune condition
    pub fn commune(scope: CommuneScope, ids: Vec<String>) -> Self {
        Condition::Commune { scope, ids }
    }

    /// Build a loyalty condition
    pub fn fidelite(op: ThresholdOp, years: u32) -> Self {
        Condition::Fidelite { op, years }
    }

    /// Build a household-registrant-count condition
    pub fn multi_inscriptions(op: ThresholdOp, count: u32) -> Self {
        Condition::MultiInscriptions { op, count }
    }

    /// Build a social-status condition
    pub fn statut_social(statuses: Vec<String>, inverse: bool) -> Self {
        Condition::StatutSocial { statuses, inverse }
    }
}
