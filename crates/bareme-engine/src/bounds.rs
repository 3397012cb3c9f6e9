//! Price bounds
//!
//! Estimates the price range a tree can produce, for display before a
//! subject is evaluated. The worst-case discount is summed independently
//! per top-level node (best branch per node, recursively through children).
//! This deliberately does not simulate the chain walk's interleaving, so
//! the minimum is a conservative estimate, not an exact reachable price;
//! containment of every actual evaluation result still holds.

use crate::reduction;
use crate::result::PriceBounds;
use bareme_core::{Node, TreeDocument};
use rust_decimal::Decimal;

/// Price range a document can produce for the given base price
pub fn bounds(document: &TreeDocument, base_price: Decimal) -> PriceBounds {
    let worst_case_total: Decimal = document
        .nodes
        .iter()
        .map(|node| node_max_reduction(node, base_price))
        .sum();

    let mut min = base_price - worst_case_total;
    if min < Decimal::ZERO {
        min = Decimal::ZERO;
    }

    PriceBounds {
        min,
        max: base_price,
    }
}

/// Maximum reduction achievable within one node: best branch, where a
/// branch is worth its own reduction plus its children's maxima
fn node_max_reduction(node: &Node, base_price: Decimal) -> Decimal {
    node.branches
        .iter()
        .map(|branch| {
            let own = reduction::amount(branch.reduction.as_ref(), base_price);
            let children: Decimal = branch
                .children
                .iter()
                .map(|child| node_max_reduction(child, base_price))
                .sum();
            own + children
        })
        .max()
        .unwrap_or(Decimal::ZERO)
}
