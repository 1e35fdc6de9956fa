//! Quantities

use std::fmt;

use thiserror::Error;

/// Errors raised while constructing a [`Quantity`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one.
    #[error("quantity must be at least 1, got {0}")]
    TooSmall(i64),

    /// Quantities are capped at `u32::MAX`.
    #[error("quantity must be at most {max}, got {0}", max = u32::MAX)]
    TooLarge(i64),
}

/// Number of units purchased, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Validate a requested quantity.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::TooSmall`] for zero or negative quantities.
    /// - [`QuantityError::TooLarge`] for quantities above `u32::MAX`.
    pub fn new(quantity: i64) -> Result<Self, QuantityError> {
        if quantity < 1 {
            return Err(QuantityError::TooSmall(quantity));
        }

        u32::try_from(quantity)
            .map(Self)
            .map_err(|_overflow| QuantityError::TooLarge(quantity))
    }

    /// Number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(quantity: i64) -> Result<Self, Self::Error> {
        Self::new(quantity)
    }
}

impl From<Quantity> for u64 {
    fn from(quantity: Quantity) -> Self {
        u64::from(quantity.0)
    }
}
