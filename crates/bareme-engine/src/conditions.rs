//! Condition evaluation
//!
//! Pure functions testing one subject attribute against one typed condition.
//! Total over all condition shapes: missing-field malformation is
//! unrepresentable in the typed document model and rejected at load time,
//! and kind mismatches are rejected by the resolver.

use bareme_core::document::condition::{AgeTest, CommuneScope, QfTest, ThresholdOp};
use bareme_core::{Condition, EvaluationContext};
use rust_decimal::Decimal;

/// Test a condition against a subject
pub fn matches(condition: &Condition, ctx: &EvaluationContext) -> bool {
    match condition {
        Condition::CatchAll => true,

        Condition::Commune { scope, ids } => match scope {
            CommuneScope::Catchall => true,
            CommuneScope::ExplicitList => ctx
                .residence_id
                .as_deref()
                .map(|residence| ids.iter().any(|id| id == residence))
                .unwrap_or(false),
            CommuneScope::Community => ctx
                .community_ids
                .iter()
                .any(|community| ids.contains(community)),
        },

        Condition::Age { test } => age_matches(*test, ctx.age),

        Condition::Qf { test } => qf_matches(*test, ctx.qf),

        Condition::Fidelite { op, years } => threshold_matches(*op, ctx.membership_years, *years),

        Condition::MultiInscriptions { op, count } => {
            threshold_matches(*op, ctx.household_count, *count)
        }

        Condition::StatutSocial { statuses, inverse } => {
            let member = ctx
                .social_status
                .as_deref()
                .map(|status| statuses.iter().any(|s| s == status))
                .unwrap_or(false);
            member != *inverse
        }
    }
}

fn age_matches(test: AgeTest, age: u32) -> bool {
    match test {
        AgeTest::Lt { value } => age < value,
        AgeTest::Lte { value } => age <= value,
        AgeTest::Gt { value } => age > value,
        AgeTest::Gte { value } => age >= value,
        AgeTest::Eq { value } => age == value,
        AgeTest::Between { min, max } => age >= min && age <= max,
    }
}

fn qf_matches(test: QfTest, qf: Option<Decimal>) -> bool {
    match test {
        QfTest::IsNull => qf.is_none(),
        QfTest::Lt { value } => qf.map(|q| q < value).unwrap_or(false),
        QfTest::Lte { value } => qf.map(|q| q <= value).unwrap_or(false),
        QfTest::Gt { value } => qf.map(|q| q > value).unwrap_or(false),
        QfTest::Gte { value } => qf.map(|q| q >= value).unwrap_or(false),
        QfTest::Between { min, max } => qf.map(|q| q >= min && q <= max).unwrap_or(false),
    }
}

fn threshold_matches(op: ThresholdOp, actual: u32, expected: u32) -> bool {
    match op {
        ThresholdOp::Gte => actual >= expected,
        ThresholdOp::Gt => actual > expected,
        ThresholdOp::Eq => actual == expected,
    }
}
