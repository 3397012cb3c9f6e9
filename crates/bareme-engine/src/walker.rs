//! Chain walk — the core evaluation algorithm
//!
//! Walks the ordered top-level nodes. When the branch taken at a node opens
//! a sub-chain, its children run next, ahead of the remaining outer chain.
//! Each visited node contributes one trail step; reductions accumulate
//! against the original base price and the final price is floored at zero.

use crate::error::Result;
use crate::reduction;
use crate::resolver;
use crate::result::{EvaluationResult, TrailStep};
use bareme_core::{EvaluationContext, Node, TreeDocument};
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Evaluate a document against a subject
///
/// Expects a validated document (validation runs on load and on every
/// mutation, before evaluation).
pub fn evaluate(
    document: &TreeDocument,
    base_price: Decimal,
    ctx: &EvaluationContext,
) -> Result<EvaluationResult> {
    let mut queue: VecDeque<&Node> = document.sorted_nodes().into();
    let mut total_reduction = Decimal::ZERO;
    let mut trail = Vec::new();

    while let Some(node) = queue.pop_front() {
        let branch = resolver::resolve(node, ctx)?;
        let delta = reduction::amount(branch.reduction.as_ref(), base_price);
        total_reduction += delta;

        let mut step = TrailStep::new(node.kind, branch.code.clone(), branch.label.clone(), delta);
        step.accounting_ref = branch
            .reduction
            .as_ref()
            .and_then(|r| r.accounting_ref.clone());
        trail.push(step);

        // The branch's sub-chain runs before the outer chain resumes
        for child in branch.children.iter().rev() {
            queue.push_front(child);
        }
    }

    let mut final_price = base_price - total_reduction;
    if final_price < Decimal::ZERO {
        final_price = Decimal::ZERO;
    }

    tracing::debug!(
        %base_price,
        %total_reduction,
        %final_price,
        steps = trail.len(),
        "evaluation complete"
    );

    Ok(EvaluationResult {
        final_price,
        total_reduction,
        trail,
    })
}
