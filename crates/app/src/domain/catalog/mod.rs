//! Catalog Gateway
//!
//! The pricing service's only view of the product catalog: a read-only lookup
//! from an opaque product identifier to the product's current name and price.

use async_trait::async_trait;
use mockall::automock;
use rebate::products::{Product, ProductError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("catalog holds an invalid product")]
    InvalidProduct(#[source] ProductError),
}

#[automock]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Resolve a product identifier to a snapshot of the product.
    ///
    /// Identifiers that do not resolve, including malformed ones, are
    /// [`CatalogError::NotFound`].
    async fn find_product(&self, id: &str) -> Result<Product, CatalogError>;
}
