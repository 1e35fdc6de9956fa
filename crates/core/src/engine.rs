//! Discount Engine
//!
//! Applies an ordered list of discount rules to a product line.
//!
//! Every rule is validated before any is applied, so a request either yields a
//! complete [`DiscountResult`] or an error, never a partially discounted line.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, error};

use crate::{
    discounts::{DiscountError, DiscountRule, DiscountSpec},
    money::{Money, MoneyError},
    products::Product,
    quantity::{Quantity, QuantityError},
    receipt::{AppliedDiscount, AppliedDiscounts, DiscountResult, INLINE_DISCOUNTS},
};

/// Invalid input, detected before any rule is applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Quantity was zero, negative or too large.
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    /// A discount in the list was invalid.
    #[error("discount {} is invalid: {source}", .index + 1)]
    Discount {
        /// Zero-based position of the discount in the request
        index: usize,

        /// Why the discount was rejected
        #[source]
        source: DiscountError,
    },

    /// Unit price times quantity does not fit in the money representation.
    #[error("total price is out of range")]
    TotalOutOfRange,
}

/// Errors returned by [`calculate`] and [`apply_rules`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The request was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Money arithmetic overflowed while applying a rule.
    #[error("arithmetic overflow while applying discounts")]
    Arithmetic(#[from] MoneyError),

    /// The audit trail does not add up to the total savings.
    #[error("audit trail sums to {audited} but total savings are {savings}")]
    InconsistentAudit {
        /// Original price minus discounted price
        savings: Money,

        /// Sum of the per-rule savings
        audited: Money,
    },
}

/// Validate every spec, failing on the first invalid one.
///
/// # Errors
///
/// Returns [`ValidationError::Discount`] with the position of the first
/// invalid spec.
pub fn validate_discounts(
    discounts: &[DiscountSpec],
) -> Result<SmallVec<[DiscountRule; INLINE_DISCOUNTS]>, ValidationError> {
    discounts
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            DiscountRule::try_from(spec).map_err(|source| ValidationError::Discount { index, source })
        })
        .collect()
}

/// Price `quantity` units of `product` with the requested discounts.
///
/// # Errors
///
/// - [`EngineError::Validation`] if the quantity or any discount is invalid.
/// - [`EngineError::Arithmetic`] or [`EngineError::InconsistentAudit`] on an
///   internal fault.
pub fn calculate(
    product: &Product,
    quantity: i64,
    discounts: &[DiscountSpec],
) -> Result<DiscountResult, EngineError> {
    let quantity = Quantity::new(quantity).map_err(ValidationError::from)?;

    // Fail on the total before touching the rules
    original_price(product, quantity)?;

    let rules = validate_discounts(discounts)?;

    apply_rules(product, quantity, &rules)
}

/// Price `quantity` units of `product` with already validated rules.
///
/// # Errors
///
/// - [`EngineError::Validation`] if the line total overflows.
/// - [`EngineError::Arithmetic`] or [`EngineError::InconsistentAudit`] on an
///   internal fault.
pub fn apply_rules(
    product: &Product,
    quantity: Quantity,
    rules: &[DiscountRule],
) -> Result<DiscountResult, EngineError> {
    let original = original_price(product, quantity)?;
    let mut running = original;
    let mut applied = AppliedDiscounts::with_capacity(rules.len());

    for (index, rule) in rules.iter().enumerate() {
        let step = rule.apply(running, product.unit_price(), quantity)?;

        debug!(
            product = product.id(),
            index,
            rule = %rule,
            saved = %step.saved,
            price = %step.price,
            "discount applied"
        );

        running = step.price;
        applied.push(AppliedDiscount::new(*rule, step.saved));
    }

    let savings = reconcile(original, running, &applied)?;

    Ok(DiscountResult::new(
        product.clone(),
        quantity,
        original,
        running,
        savings,
        applied,
    ))
}

fn original_price(product: &Product, quantity: Quantity) -> Result<Money, ValidationError> {
    product
        .unit_price()
        .checked_mul_quantity(quantity.into())
        .map_err(|_overflow| ValidationError::TotalOutOfRange)
}

/// Check the audit trail against the total and return the total savings.
fn reconcile(
    original: Money,
    discounted: Money,
    applied: &[AppliedDiscount],
) -> Result<Money, EngineError> {
    let savings = original.saturating_sub(discounted);

    let audited = applied
        .iter()
        .try_fold(Money::zero(), |total, discount| {
            total.checked_add(discount.saved())
        })?;

    if discounted > original || audited != savings {
        error!(
            original = %original,
            discounted = %discounted,
            savings = %savings,
            audited = %audited,
            "discount audit does not reconcile"
        );

        return Err(EngineError::InconsistentAudit { savings, audited });
    }

    Ok(savings)
}
