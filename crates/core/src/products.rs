//! Products

use thiserror::Error;

use crate::money::Money;

/// Errors raised while building a [`Product`] snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Products must have a non-blank name.
    #[error("product name must not be empty")]
    EmptyName,

    /// Products must cost something.
    #[error("product price must be greater than zero")]
    ZeroPrice,
}

/// Read-only snapshot of a catalog product, as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    unit_price: Money,
}

impl Product {
    /// Create a product snapshot.
    ///
    /// # Errors
    ///
    /// - [`ProductError::EmptyName`] if `name` is empty or whitespace.
    /// - [`ProductError::ZeroPrice`] if `unit_price` is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Result<Self, ProductError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }

        if unit_price.is_zero() {
            return Err(ProductError::ZeroPrice);
        }

        Ok(Self {
            id: id.into(),
            name,
            unit_price,
        })
    }

    /// Catalog identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }
}
