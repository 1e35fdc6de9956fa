//! Products service errors.

use rebate::products::ProductError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("product name must not be empty")]
    InvalidName,

    #[error("product price must be greater than zero")]
    InvalidPrice,
}

impl From<ProductError> for ProductsServiceError {
    fn from(error: ProductError) -> Self {
        match error {
            ProductError::EmptyName => Self::InvalidName,
            ProductError::ZeroPrice => Self::InvalidPrice,
        }
    }
}
