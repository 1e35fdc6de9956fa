//! Product Errors

use salvo::http::StatusError;

use rebate_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::InvalidName | ProductsServiceError::InvalidPrice => {
            StatusError::bad_request()
                .brief("Invalid product payload")
                .detail(error.to_string())
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}
