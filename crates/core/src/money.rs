//! Money
//!
//! Fixed two-decimal monetary amounts stored as whole minor units (cents).

use std::{cmp, fmt};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money as RustyMoney, iso};
use rust_decimal::serde::arbitrary_precision;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::percentage::Percentage;

/// Number of fractional digits carried by every [`Money`] value.
pub const MINOR_UNIT_DIGITS: u32 = 2;

/// Errors raised while constructing or combining [`Money`] values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    /// Monetary amounts are never negative.
    #[error("amount must not be negative")]
    Negative,

    /// The amount has more fractional digits than a cent.
    #[error("amount must have at most two decimal places")]
    Precision,

    /// The result does not fit in the minor unit representation.
    #[error("amount is out of range")]
    Overflow,
}

/// A non-negative monetary amount in minor units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Create an amount from minor units (cents).
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn to_minor_units(self) -> u64 {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal amount such as `19.99`.
    ///
    /// Trailing zeros beyond the second decimal place are accepted (`1.500`),
    /// any other sub-cent digit is rejected rather than rounded.
    ///
    /// # Errors
    ///
    /// - [`MoneyError::Negative`] if `amount` is below zero.
    /// - [`MoneyError::Precision`] if `amount` has a non-zero digit past the cents.
    /// - [`MoneyError::Overflow`] if the amount does not fit in minor units.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative);
        }

        let amount = amount.normalize();

        if amount.scale() > MINOR_UNIT_DIGITS {
            return Err(MoneyError::Precision);
        }

        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.to_u64())
            .ok_or(MoneyError::Overflow)?;

        Ok(Self(minor))
    }

    /// Decimal representation with exactly two fractional digits.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), MINOR_UNIT_DIGITS)
    }

    /// Add two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the sum does not fit.
    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtract, stopping at zero instead of going negative.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Multiply by a whole quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the product does not fit.
    pub fn checked_mul_quantity(self, quantity: u64) -> Result<Self, MoneyError> {
        self.0
            .checked_mul(quantity)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// The given percentage of this amount, rounded half-up to the cent.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the intermediate product does not fit.
    pub fn percent_of(self, percent: Percentage) -> Result<Self, MoneyError> {
        let applied = Decimal::from(self.0)
            .checked_mul(percent.value())
            .and_then(|applied| applied.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(MoneyError::Overflow)?;

        applied
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// The smaller of two amounts.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        cmp::min(self, other)
    }

    /// Convert into a currency-aware amount for formatting.
    ///
    /// Returns `None` for amounts beyond `i64` minor units.
    #[must_use]
    pub fn to_rusty(
        self,
        currency: &'static iso::Currency,
    ) -> Option<RustyMoney<'static, iso::Currency>> {
        let minor = i64::try_from(self.0).ok()?;

        Some(RustyMoney::from_minor(minor, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_rusty(iso::USD) {
            Some(money) => write!(f, "{money}"),
            None => write!(f, "{}", self.to_decimal()),
        }
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        arbitrary_precision::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = arbitrary_precision::deserialize(deserializer)?;

        Self::from_decimal(amount).map_err(de::Error::custom)
    }
}
