//! Pricing Data

use rebate::discounts::DiscountSpec;

/// Calculation Request
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub product_id: String,
    pub quantity: i64,
    pub discounts: Vec<DiscountSpec>,
}
