//! Discounts
//!
//! A discount rule is applied to the running price of a line: the total
//! remaining after every earlier rule in the list has been applied.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    money::{Money, MoneyError},
    percentage::{Percentage, PercentageError},
    quantity::Quantity,
};

pub mod buy_one_get_one;
pub mod flat;
pub mod percentage;

/// Errors raised while validating a [`DiscountSpec`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// The discount type is not one of the supported kinds.
    #[error("unknown discount type \"{0}\"")]
    UnknownKind(String),

    /// Percentage and flat discounts need a value.
    #[error("{0} discount requires a value")]
    MissingValue(DiscountKind),

    /// Buy one get one discounts take no value.
    #[error("{0} discount does not take a value")]
    UnexpectedValue(DiscountKind),

    /// Percentage value was out of range.
    #[error(transparent)]
    Percentage(#[from] PercentageError),

    /// Flat amounts must be greater than zero.
    #[error("flat discount amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),

    /// Flat amount could not be represented as money.
    #[error("invalid flat discount amount: {0}")]
    Amount(#[from] MoneyError),
}

/// The supported kinds of discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    /// A percentage off the running price.
    Percentage,

    /// A fixed amount off the running price.
    Flat,

    /// Every second unit free.
    BuyOneGetOne,
}

impl DiscountKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Flat => "flat",
            DiscountKind::BuyOneGetOne => "bogo",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountKind {
    type Err = DiscountError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(DiscountKind::Percentage),
            "flat" => Ok(DiscountKind::Flat),
            "bogo" | "buy_one_get_one" => Ok(DiscountKind::BuyOneGetOne),
            _ => Err(DiscountError::UnknownKind(kind.to_string())),
        }
    }
}

/// A discount exactly as requested by a caller: a kind name and an optional value.
///
/// Convert it into a [`DiscountRule`] to validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountSpec {
    /// Discount kind name (`percentage`, `flat` or `bogo`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Percentage (in percent) or flat amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

impl DiscountSpec {
    /// Create a spec from its raw parts.
    pub fn new(kind: impl Into<String>, value: Option<Decimal>) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }

    /// A percentage discount spec.
    #[must_use]
    pub fn percentage(value: Decimal) -> Self {
        Self::new(DiscountKind::Percentage.as_str(), Some(value))
    }

    /// A flat amount discount spec.
    #[must_use]
    pub fn flat(value: Decimal) -> Self {
        Self::new(DiscountKind::Flat.as_str(), Some(value))
    }

    /// A buy one get one discount spec.
    #[must_use]
    pub fn buy_one_get_one() -> Self {
        Self::new(DiscountKind::BuyOneGetOne.as_str(), None)
    }
}

/// A validated discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountRule {
    /// Take a percentage off the running price.
    Percentage(Percentage),

    /// Take a fixed amount off the running price, never below zero.
    Flat(Money),

    /// One free unit for every two purchased.
    BuyOneGetOne,
}

/// The outcome of applying one rule to a running price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountStep {
    /// Running price after the rule
    pub price: Money,

    /// Amount actually removed by the rule
    pub saved: Money,
}

impl DiscountRule {
    /// Kind of this rule
    pub const fn kind(&self) -> DiscountKind {
        match self {
            DiscountRule::Percentage(_) => DiscountKind::Percentage,
            DiscountRule::Flat(_) => DiscountKind::Flat,
            DiscountRule::BuyOneGetOne => DiscountKind::BuyOneGetOne,
        }
    }

    /// The rule's parameter, as supplied by the caller.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            DiscountRule::Percentage(percent) => Some(percent.value()),
            DiscountRule::Flat(amount) => Some(amount.to_decimal()),
            DiscountRule::BuyOneGetOne => None,
        }
    }

    /// Apply the rule to a running price.
    ///
    /// The saving is capped at `running`, so the new price is never negative
    /// and a zero running price always saves zero.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if an intermediate amount overflows.
    pub fn apply(
        &self,
        running: Money,
        unit_price: Money,
        quantity: Quantity,
    ) -> Result<DiscountStep, MoneyError> {
        let saved = match self {
            DiscountRule::Percentage(percent) => percentage::saving(running, *percent)?,
            DiscountRule::Flat(amount) => flat::saving(running, *amount),
            DiscountRule::BuyOneGetOne => buy_one_get_one::saving(running, unit_price, quantity)?,
        }
        .min(running);

        Ok(DiscountStep {
            price: running.saturating_sub(saved),
            saved,
        })
    }
}

impl fmt::Display for DiscountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountRule::Percentage(percent) => write!(f, "{percent} off"),
            DiscountRule::Flat(amount) => write!(f, "{amount} off"),
            DiscountRule::BuyOneGetOne => f.write_str("Buy One Get One Free"),
        }
    }
}

impl TryFrom<&DiscountSpec> for DiscountRule {
    type Error = DiscountError;

    fn try_from(spec: &DiscountSpec) -> Result<Self, Self::Error> {
        let kind: DiscountKind = spec.kind.parse()?;

        match (kind, spec.value) {
            (DiscountKind::Percentage | DiscountKind::Flat, None) => {
                Err(DiscountError::MissingValue(kind))
            }
            (DiscountKind::BuyOneGetOne, Some(_)) => Err(DiscountError::UnexpectedValue(kind)),
            (DiscountKind::BuyOneGetOne, None) => Ok(DiscountRule::BuyOneGetOne),
            (DiscountKind::Percentage, Some(value)) => {
                Ok(DiscountRule::Percentage(Percentage::new(value)?))
            }
            (DiscountKind::Flat, Some(value)) => {
                if value <= Decimal::ZERO {
                    return Err(DiscountError::NonPositiveAmount(value));
                }

                Ok(DiscountRule::Flat(Money::from_decimal(value)?))
            }
        }
    }
}

impl TryFrom<DiscountSpec> for DiscountRule {
    type Error = DiscountError;

    fn try_from(spec: DiscountSpec) -> Result<Self, Self::Error> {
        Self::try_from(&spec)
    }
}

impl From<DiscountRule> for DiscountSpec {
    fn from(rule: DiscountRule) -> Self {
        DiscountSpec::new(rule.kind().as_str(), rule.value())
    }
}
