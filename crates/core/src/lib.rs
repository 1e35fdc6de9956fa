//! Rebate
//!
//! Rebate is a deterministic discount engine: given a product, a quantity and an
//! ordered list of discount rules, it computes the final price of the line and
//! an audit of how much every rule saved.
//!
//! Rules are applied in order to the running price, so `[10%, $5]` and
//! `[$5, 10%]` give different totals. All arithmetic is done in whole cents.

pub mod discounts;
pub mod engine;
pub mod money;
pub mod percentage;
pub mod prelude;
pub mod products;
pub mod quantity;
pub mod receipt;
