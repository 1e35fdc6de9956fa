//! Create Product Handler

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rebate::money::Money;
use rebate_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Product name
    pub name: String,

    /// Unit price, at most two decimal places
    pub price: Decimal,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = StatusError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let price = Money::from_decimal(request.price).map_err(|error| {
            StatusError::bad_request()
                .brief("Invalid product payload")
                .detail(format!("invalid price: {error}"))
        })?;

        Ok(NewProduct {
            name: request.name,
            price,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use rebate_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::{
        catcher::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "Widget", 1250);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Widget".to_string(),
                    price: Money::from_minor(1250),
                }
            })
            .return_once(move |_| Ok(product));

        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": 12.5 }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/products/{uuid}").as_str()));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.price, dec!(12.50));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_accepts_string_price() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "Widget", 999);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.price == Money::from_minor(999))
            .return_once(move |_| Ok(product));

        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": "9.99" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_sub_cent_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": 9.999 }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.detail,
            "invalid price: amount must have at most two decimal places"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_negative_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": -1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_name_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidName));

        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": " ", "price": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_fields_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
