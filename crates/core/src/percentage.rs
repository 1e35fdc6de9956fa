//! Percentages

use std::fmt;

use rust_decimal::{Decimal, serde::arbitrary_precision};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Errors raised while constructing a [`Percentage`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PercentageError {
    /// Percentages must be greater than zero and at most one hundred.
    #[error("percentage must be greater than 0 and at most 100, got {0}")]
    OutOfRange(Decimal),
}

/// A percentage in the range (0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Create a percentage from its value in percent, e.g. `12.5` for 12.5%.
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::OutOfRange`] unless `0 < value <= 100`.
    pub fn new(value: Decimal) -> Result<Self, PercentageError> {
        if value <= Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(PercentageError::OutOfRange(value));
        }

        Ok(Self(value.normalize()))
    }

    /// Value in percent.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = PercentageError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        arbitrary_precision::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::new(arbitrary_precision::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}
