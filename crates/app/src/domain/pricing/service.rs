//! Pricing service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rebate::{
    engine::{self, EngineError},
    receipt::DiscountResult,
};
use tracing::{error, info, warn};

use crate::domain::{
    catalog::CatalogGateway,
    pricing::{data::CalculationRequest, errors::PricingServiceError},
};

/// Prices product lines using products resolved through a catalog gateway.
#[derive(Clone)]
pub struct CatalogPricingService {
    catalog: Arc<dyn CatalogGateway>,
}

impl CatalogPricingService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogGateway>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl PricingService for CatalogPricingService {
    async fn calculate(
        &self,
        request: CalculationRequest,
    ) -> Result<DiscountResult, PricingServiceError> {
        let product = self.catalog.find_product(&request.product_id).await?;

        match engine::calculate(&product, request.quantity, &request.discounts) {
            Ok(result) => {
                info!(
                    product = product.id(),
                    quantity = request.quantity,
                    discounts = result.applied_discounts().len(),
                    original = %result.original_price(),
                    discounted = %result.discounted_price(),
                    savings = %result.savings(),
                    "discount calculated"
                );

                Ok(result)
            }
            Err(EngineError::Validation(validation)) => {
                warn!(product = product.id(), error = %validation, "discount request rejected");

                Err(validation.into())
            }
            Err(fault) => {
                error!(product = product.id(), error = %fault, "discount calculation failed");

                Err(fault.into())
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Price a product line with an ordered list of discounts.
    async fn calculate(
        &self,
        request: CalculationRequest,
    ) -> Result<DiscountResult, PricingServiceError>;
}

#[cfg(test)]
mod tests {
    use rebate::{
        discounts::{DiscountError, DiscountKind, DiscountSpec},
        engine::ValidationError,
        money::Money,
        products::{Product, ProductError},
    };
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::domain::catalog::{CatalogError, MockCatalogGateway};

    use super::*;

    fn widget() -> Result<Product, ProductError> {
        Product::new("widget-1", "Widget", Money::from_minor(10_000))
    }

    fn service_with(catalog: MockCatalogGateway) -> CatalogPricingService {
        CatalogPricingService::new(Arc::new(catalog))
    }

    fn request(quantity: i64, discounts: Vec<DiscountSpec>) -> CalculationRequest {
        CalculationRequest {
            product_id: "widget-1".to_string(),
            quantity,
            discounts,
        }
    }

    #[tokio::test]
    async fn calculate_prices_the_resolved_product() -> TestResult {
        let product = widget()?;

        let mut catalog = MockCatalogGateway::new();

        catalog
            .expect_find_product()
            .once()
            .withf(|id| id == "widget-1")
            .return_once(move |_| Ok(product));

        let result = service_with(catalog)
            .calculate(request(
                1,
                vec![DiscountSpec::percentage(dec!(10)), DiscountSpec::flat(dec!(5))],
            ))
            .await?;

        assert_eq!(result.product().name(), "Widget");
        assert_eq!(result.original_price(), Money::from_minor(10_000));
        assert_eq!(result.discounted_price(), Money::from_minor(8500));
        assert_eq!(result.savings(), Money::from_minor(1500));
        assert_eq!(result.applied_discounts().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn calculate_returns_not_found_for_unknown_product() {
        let mut catalog = MockCatalogGateway::new();

        catalog
            .expect_find_product()
            .once()
            .return_once(|_| Err(CatalogError::NotFound));

        let result = service_with(catalog).calculate(request(1, Vec::new())).await;

        assert_eq!(result, Err(PricingServiceError::NotFound));
    }

    #[tokio::test]
    async fn calculate_rejects_invalid_discounts() -> TestResult {
        let product = widget()?;

        let mut catalog = MockCatalogGateway::new();

        catalog
            .expect_find_product()
            .once()
            .return_once(move |_| Ok(product));

        let result = service_with(catalog)
            .calculate(request(2, vec![DiscountSpec::new("coupon", Some(dec!(5)))]))
            .await;

        assert_eq!(
            result,
            Err(PricingServiceError::Validation(ValidationError::Discount {
                index: 0,
                source: DiscountError::UnknownKind("coupon".to_string()),
            }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn calculate_rejects_non_positive_quantity() -> TestResult {
        let product = widget()?;

        let mut catalog = MockCatalogGateway::new();

        catalog
            .expect_find_product()
            .once()
            .return_once(move |_| Ok(product));

        let result = service_with(catalog)
            .calculate(request(-3, vec![DiscountSpec::buy_one_get_one()]))
            .await;

        assert!(matches!(
            result,
            Err(PricingServiceError::Validation(ValidationError::Quantity(_)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn calculate_reports_catalog_faults() {
        let mut catalog = MockCatalogGateway::new();

        catalog
            .expect_find_product()
            .once()
            .return_once(|_| Err(CatalogError::InvalidProduct(ProductError::ZeroPrice)));

        let result = service_with(catalog).calculate(request(1, Vec::new())).await;

        assert_eq!(
            result,
            Err(PricingServiceError::Catalog(CatalogError::InvalidProduct(
                ProductError::ZeroPrice
            )))
        );
    }

    #[tokio::test]
    async fn calculate_reports_missing_discount_value_with_its_position() -> TestResult {
        let product = widget()?;

        let mut catalog = MockCatalogGateway::new();

        catalog
            .expect_find_product()
            .once()
            .return_once(move |_| Ok(product));

        let result = service_with(catalog)
            .calculate(request(
                1,
                vec![DiscountSpec::percentage(dec!(10)), DiscountSpec::new("flat", None)],
            ))
            .await;

        let Err(error) = result else {
            return Err("expected a validation error".into());
        };

        assert_eq!(
            error,
            PricingServiceError::Validation(ValidationError::Discount {
                index: 1,
                source: DiscountError::MissingValue(DiscountKind::Flat),
            })
        );
        assert_eq!(
            error.to_string(),
            "discount 2 is invalid: flat discount requires a value"
        );

        Ok(())
    }
}
