//! Percentage Discount
//!
//! Takes a percentage of the running price, so percentages compound with
//! whatever was applied before them.

use crate::{
    money::{Money, MoneyError},
    percentage::Percentage,
};

/// Amount saved by taking `percent` off `running`, rounded half-up to the cent.
///
/// # Errors
///
/// Returns [`MoneyError::Overflow`] if the intermediate product overflows.
pub fn saving(running: Money, percent: Percentage) -> Result<Money, MoneyError> {
    running.percent_of(percent)
}
