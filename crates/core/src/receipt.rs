//! Receipt
//!
//! The engine's output: the priced line and the audit trail of every rule.

use smallvec::SmallVec;

use crate::{
    discounts::{DiscountKind, DiscountRule},
    money::Money,
    products::Product,
    quantity::Quantity,
};

/// Inline capacity of the audit trail. Callers rarely stack more offers.
pub const INLINE_DISCOUNTS: usize = 4;

/// Audit trail of applied discounts, in application order.
pub type AppliedDiscounts = SmallVec<[AppliedDiscount; INLINE_DISCOUNTS]>;

/// One rule of the audit trail and how much it saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDiscount {
    rule: DiscountRule,
    saved: Money,
}

impl AppliedDiscount {
    /// Record that `rule` removed `saved` from the running price.
    pub const fn new(rule: DiscountRule, saved: Money) -> Self {
        Self { rule, saved }
    }

    /// The applied rule, including its parameters
    pub const fn rule(&self) -> &DiscountRule {
        &self.rule
    }

    /// Kind of the applied rule
    pub const fn kind(&self) -> DiscountKind {
        self.rule.kind()
    }

    /// Amount removed by this rule
    pub const fn saved(&self) -> Money {
        self.saved
    }
}

/// Final price of a product line after all discounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountResult {
    product: Product,
    quantity: Quantity,
    original_price: Money,
    discounted_price: Money,
    savings: Money,
    applied_discounts: AppliedDiscounts,
}

impl DiscountResult {
    pub(crate) fn new(
        product: Product,
        quantity: Quantity,
        original_price: Money,
        discounted_price: Money,
        savings: Money,
        applied_discounts: AppliedDiscounts,
    ) -> Self {
        Self {
            product,
            quantity,
            original_price,
            discounted_price,
            savings,
            applied_discounts,
        }
    }

    /// Product snapshot the line was priced from
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Number of units
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price times quantity, before any discount
    pub const fn original_price(&self) -> Money {
        self.original_price
    }

    /// Price after every discount
    pub const fn discounted_price(&self) -> Money {
        self.discounted_price
    }

    /// Total amount saved
    pub const fn savings(&self) -> Money {
        self.savings
    }

    /// Audit trail, one entry per requested discount in request order
    pub fn applied_discounts(&self) -> &[AppliedDiscount] {
        &self.applied_discounts
    }
}
