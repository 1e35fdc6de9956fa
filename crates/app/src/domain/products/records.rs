//! Product Records

use jiff::Timestamp;
use rebate::{
    money::Money,
    products::{Product, ProductError},
};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Money,
    pub created_at: Timestamp,
}

impl ProductRecord {
    /// Read-only snapshot handed to the discount engine.
    pub fn snapshot(&self) -> Result<Product, ProductError> {
        Product::new(self.uuid.to_string(), self.name.clone(), self.price)
    }
}
