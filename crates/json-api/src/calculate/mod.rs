//! Discount Calculation

mod errors;
pub(crate) mod handler;
pub(crate) mod request;
pub(crate) mod response;
