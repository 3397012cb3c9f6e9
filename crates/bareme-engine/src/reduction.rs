//! Reduction accumulation
//!
//! Computes the monetary delta a branch's reduction spec grants. Deltas are
//! additive against the tariff's original base price: two 10% branches make
//! a 20%-of-base discount, never a compounded one.

use bareme_core::{Reduction, ReductionKind};
use rust_decimal::Decimal;

/// Monetary delta granted by a reduction spec, against the original base price
pub fn amount(reduction: Option<&Reduction>, base_price: Decimal) -> Decimal {
    match reduction {
        None => Decimal::ZERO,
        Some(r) => match r.kind {
            ReductionKind::Fixed => r.amount,
            ReductionKind::Percentage => base_price * r.amount / Decimal::ONE_HUNDRED,
        },
    }
}
