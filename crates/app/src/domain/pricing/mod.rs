//! Pricing

pub mod data;
pub mod errors;
pub mod service;

pub use errors::PricingServiceError;
pub use service::*;
