//! Service-level tests across the products and pricing services.
