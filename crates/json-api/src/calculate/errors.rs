//! Calculation Errors

use salvo::http::StatusError;

use rebate_app::domain::pricing::PricingServiceError;

pub(crate) fn into_status_error(error: PricingServiceError) -> StatusError {
    match error {
        PricingServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        PricingServiceError::Validation(source) => StatusError::bad_request()
            .brief("Invalid discount request")
            .detail(source.to_string()),
        PricingServiceError::Inconsistent(_) | PricingServiceError::Catalog(_) => {
            StatusError::internal_server_error()
        }
    }
}
