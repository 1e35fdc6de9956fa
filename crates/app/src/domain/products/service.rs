//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rebate::products::Product;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    catalog::{CatalogError, CatalogGateway},
    products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
    },
};

/// Process-local product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    products: RwLock<FxHashMap<ProductUuid, ProductRecord>>,
}

impl InMemoryProductsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.products.read().await;

        let mut records: Vec<ProductRecord> = products.values().cloned().collect();

        records.sort_by_key(|record| record.uuid);

        Ok(records)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.products
            .read()
            .await
            .get(&product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let uuid = ProductUuid::new();
        let name = product.name.trim().to_string();

        // Run the same checks the engine relies on when it prices the product
        Product::new(uuid.to_string(), name.clone(), product.price)?;

        let record = ProductRecord {
            uuid,
            name,
            price: product.price,
            created_at: Timestamp::now(),
        };

        self.products.write().await.insert(uuid, record.clone());

        debug!(product = %uuid, price = %record.price, "product created");

        Ok(record)
    }
}

#[async_trait]
impl CatalogGateway for InMemoryProductsService {
    async fn find_product(&self, id: &str) -> Result<Product, CatalogError> {
        let Ok(uuid) = id.parse::<ProductUuid>() else {
            return Err(CatalogError::NotFound);
        };

        let products = self.products.read().await;

        let record = products.get(&uuid).ok_or(CatalogError::NotFound)?;

        record.snapshot().map_err(CatalogError::InvalidProduct)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, oldest first.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product with the given name and unit price.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
