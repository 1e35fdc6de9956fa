//! Calculate Discount Request

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use rebate::discounts::DiscountSpec;
use rebate_app::domain::pricing::data::CalculationRequest;

/// A discount to apply, in request order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountRequest {
    /// Discount type: `percentage`, `flat` or `bogo`
    #[serde(rename = "type")]
    pub kind: String,

    /// Percentage in (0, 100] or flat amount; omitted for `bogo`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

impl From<DiscountRequest> for DiscountSpec {
    fn from(request: DiscountRequest) -> Self {
        DiscountSpec::new(request.kind, request.value)
    }
}

/// Calculate Discount Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculateRequest {
    /// Identifier of the product to price
    pub product_id: String,

    /// Number of units, at least one
    pub quantity: i64,

    /// Discounts to apply, in order
    #[serde(default)]
    pub discounts: Vec<DiscountRequest>,
}

impl From<CalculateRequest> for CalculationRequest {
    fn from(request: CalculateRequest) -> Self {
        CalculationRequest {
            product_id: request.product_id,
            quantity: request.quantity,
            discounts: request.discounts.into_iter().map(Into::into).collect(),
        }
    }
}
