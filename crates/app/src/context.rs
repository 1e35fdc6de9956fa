//! App Context

use std::sync::Arc;

use crate::domain::{
    pricing::{CatalogPricingService, PricingService},
    products::{InMemoryProductsService, ProductsService},
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub pricing: Arc<dyn PricingService>,
}

impl AppContext {
    /// Build an application context backed by a process-local catalog.
    ///
    /// The products service doubles as the pricing service's catalog gateway,
    /// so products created through one are priced by the other.
    #[must_use]
    pub fn in_memory() -> Self {
        let catalog = Arc::new(InMemoryProductsService::new());

        Self {
            products: catalog.clone(),
            pricing: Arc::new(CatalogPricingService::new(catalog)),
        }
    }
}
