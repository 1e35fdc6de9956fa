//! Rebate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::{DiscountError, DiscountKind, DiscountRule, DiscountSpec, DiscountStep},
    engine::{EngineError, ValidationError, apply_rules, calculate, validate_discounts},
    money::{Money, MoneyError},
    percentage::{Percentage, PercentageError},
    products::{Product, ProductError},
    quantity::{Quantity, QuantityError},
    receipt::{AppliedDiscount, AppliedDiscounts, DiscountResult},
};
