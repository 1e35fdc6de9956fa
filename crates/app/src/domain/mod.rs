//! Rebate Domain Concerns

pub mod catalog;
pub mod pricing;
pub mod products;
