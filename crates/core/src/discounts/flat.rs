//! Flat Discount

use crate::money::Money;

/// Amount saved by taking `amount` off `running`.
///
/// Clamps to `running` when the flat amount is larger than what is left.
pub fn saving(running: Money, amount: Money) -> Money {
    amount.min(running)
}
