//! Calculate Discount Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    calculate::{errors::into_status_error, request::CalculateRequest, response::CalculateResponse},
    extensions::*,
};

/// Calculate Discount Handler
///
/// Prices a product line, applying the discounts in the order given.
#[endpoint(
    tags("pricing"),
    summary = "Calculate Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discounts applied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or discount"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CalculateRequest>,
    depot: &mut Depot,
) -> Result<Json<CalculateResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let result = state
        .app
        .pricing
        .calculate(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(result.into()))
}

#[cfg(test)]
mod tests {
    use rebate::{
        discounts::{DiscountError, DiscountSpec},
        engine::{self, EngineError, ValidationError},
        money::Money,
        products::Product,
        quantity::QuantityError,
    };
    use rebate_app::domain::pricing::{MockPricingService, PricingServiceError};
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{catcher::ErrorResponse, test_helpers::pricing_service};

    use super::*;

    fn make_service(pricing: MockPricingService) -> Service {
        pricing_service(pricing, Router::with_path("calculate-discount").post(handler))
    }

    #[tokio::test]
    async fn test_calculate_returns_priced_line() -> TestResult {
        let product = Product::new("prod-1", "Widget", Money::from_minor(10_000))?;
        let discounts = vec![DiscountSpec::percentage(dec!(10)), DiscountSpec::flat(dec!(5))];
        let result = engine::calculate(&product, 1, &discounts)?;

        let mut pricing = MockPricingService::new();

        pricing
            .expect_calculate()
            .once()
            .withf(move |request| {
                request.product_id == "prod-1"
                    && request.quantity == 1
                    && request.discounts == discounts
            })
            .return_once(move |_| Ok(result));

        let mut res = TestClient::post("http://example.com/calculate-discount")
            .json(&json!({
                "product_id": "prod-1",
                "quantity": 1,
                "discounts": [
                    { "type": "percentage", "value": 10 },
                    { "type": "flat", "value": 5 }
                ]
            }))
            .send(&make_service(pricing))
            .await;

        let text = res.take_string().await?;
        let body: CalculateResponse = serde_json::from_str(&text)?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.discounted_price, dec!(85.00));
        assert_eq!(body.savings, dec!(15.00));
        assert_eq!(body.applied_discounts.len(), 2);
        assert_eq!(body.applied_discounts[0].kind, "percentage");
        assert_eq!(body.applied_discounts[0].params.value, Some(dec!(10.00)));
        assert_eq!(body.applied_discounts[1].params.value, Some(dec!(5.00)));
        assert_eq!(body.applied_discounts[1].saved, dec!(5.00));

        assert!(text.contains(r#""discounted_price":85.00"#), "{text}");
        assert!(text.contains(r#""savings":15.00"#), "{text}");
        assert!(
            text.contains(r#""params":{"value":10.00},"saved":10.00"#),
            "{text}"
        );
        assert!(
            text.contains(r#""params":{"value":5.00},"saved":5.00"#),
            "{text}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_unknown_product_returns_404() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing
            .expect_calculate()
            .once()
            .return_once(|_| Err(PricingServiceError::NotFound));

        let mut res = TestClient::post("http://example.com/calculate-discount")
            .json(&json!({ "product_id": "missing", "quantity": 1, "discounts": [] }))
            .send(&make_service(pricing))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.detail, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_validation_error_returns_400() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate().once().return_once(|_| {
            Err(PricingServiceError::Validation(ValidationError::Discount {
                index: 0,
                source: DiscountError::UnknownKind("coupon".to_string()),
            }))
        });

        let mut res = TestClient::post("http://example.com/calculate-discount")
            .json(&json!({
                "product_id": "prod-1",
                "quantity": 1,
                "discounts": [{ "type": "coupon", "value": 5 }]
            }))
            .send(&make_service(pricing))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.detail,
            r#"discount 1 is invalid: unknown discount type "coupon""#
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_zero_quantity_returns_400() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing
            .expect_calculate()
            .once()
            .withf(|request| request.quantity == 0)
            .return_once(|_| {
                Err(PricingServiceError::Validation(ValidationError::Quantity(
                    QuantityError::TooSmall(0),
                )))
            });

        let res = TestClient::post("http://example.com/calculate-discount")
            .json(&json!({ "product_id": "prod-1", "quantity": 0, "discounts": [] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_inconsistent_audit_returns_500() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate().once().return_once(|_| {
            Err(PricingServiceError::Inconsistent(
                EngineError::InconsistentAudit {
                    savings: Money::from_minor(100),
                    audited: Money::from_minor(50),
                },
            ))
        });

        let mut res = TestClient::post("http://example.com/calculate-discount")
            .json(&json!({ "product_id": "prod-1", "quantity": 1, "discounts": [] }))
            .send(&make_service(pricing))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!body.detail.contains("audit"), "{}", body.detail);

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_malformed_body_returns_400() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate().never();

        let res = TestClient::post("http://example.com/calculate-discount")
            .json(&json!({ "product_id": "prod-1", "quantity": "two" }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
