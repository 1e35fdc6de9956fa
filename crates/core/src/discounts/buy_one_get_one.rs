//! Buy One Get One Free
//!
//! One unit is free for every two purchased. The nominal saving is the unit
//! price of the free units, capped at the running price in case earlier rules
//! already took the line below that value.

use crate::{
    money::{Money, MoneyError},
    quantity::Quantity,
};

/// Number of free units for a quantity.
pub fn free_units(quantity: Quantity) -> u64 {
    u64::from(quantity) / 2
}

/// Amount saved on a line of `quantity` units at `unit_price`.
///
/// # Errors
///
/// Returns [`MoneyError::Overflow`] if the free units' value overflows.
pub fn saving(running: Money, unit_price: Money, quantity: Quantity) -> Result<Money, MoneyError> {
    let nominal = unit_price.checked_mul_quantity(free_units(quantity))?;

    Ok(nominal.min(running))
}
