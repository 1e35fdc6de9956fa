//! Calculate Discount Response
//!
//! Shapes an engine result for the wire. No amounts are computed here, every
//! figure is copied from the [`DiscountResult`].

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use rebate::{
    products::Product,
    receipt::{AppliedDiscount, DiscountResult},
};

/// The product as it was priced
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSnapshotResponse {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl From<&Product> for ProductSnapshotResponse {
    fn from(product: &Product) -> Self {
        ProductSnapshotResponse {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.unit_price().to_decimal(),
        }
    }
}

/// Parameters of an applied discount, echoed from the request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountParamsResponse {
    /// Percentage or flat amount, absent for `bogo`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub value: Option<Decimal>,
}

/// One step of the discount audit trail
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AppliedDiscountResponse {
    /// Discount type
    #[serde(rename = "type")]
    pub kind: String,

    /// Discount parameters
    pub params: DiscountParamsResponse,

    /// Amount this discount removed from the running price
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub saved: Decimal,
}

impl From<&AppliedDiscount> for AppliedDiscountResponse {
    fn from(applied: &AppliedDiscount) -> Self {
        AppliedDiscountResponse {
            kind: applied.kind().to_string(),
            params: DiscountParamsResponse {
                value: applied.rule().value().map(at_least_two_places),
            },
            saved: applied.saved().to_decimal(),
        }
    }
}

fn at_least_two_places(mut value: Decimal) -> Decimal {
    if value.scale() < 2 {
        value.rescale(2);
    }

    value
}

/// Calculate Discount Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculateResponse {
    /// Product snapshot
    pub product: ProductSnapshotResponse,

    /// Number of units priced
    pub quantity: u32,

    /// Unit price times quantity
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub original_price: Decimal,

    /// Price after every discount
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discounted_price: Decimal,

    /// Original price minus discounted price
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub savings: Decimal,

    /// One entry per requested discount, in request order
    pub applied_discounts: Vec<AppliedDiscountResponse>,
}

impl From<DiscountResult> for CalculateResponse {
    fn from(result: DiscountResult) -> Self {
        CalculateResponse {
            product: result.product().into(),
            quantity: result.quantity().get(),
            original_price: result.original_price().to_decimal(),
            discounted_price: result.discounted_price().to_decimal(),
            savings: result.savings().to_decimal(),
            applied_discounts: result
                .applied_discounts()
                .iter()
                .map(Into::into)
                .collect(),
        }
    }
}
