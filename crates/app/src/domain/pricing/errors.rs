//! Pricing service errors.

use rebate::engine::{EngineError, ValidationError};
use thiserror::Error;

use crate::domain::catalog::CatalogError;

#[derive(Debug, Error, PartialEq)]
pub enum PricingServiceError {
    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("discount calculation failed")]
    Inconsistent(#[source] EngineError),

    #[error("catalog lookup failed")]
    Catalog(#[source] CatalogError),
}

impl From<EngineError> for PricingServiceError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation(validation) => Self::Validation(validation),
            other => Self::Inconsistent(other),
        }
    }
}

impl From<CatalogError> for PricingServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::NotFound,
            other => Self::Catalog(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use rebate::{money::Money, quantity::QuantityError};

    use super::*;

    #[test]
    fn engine_validation_errors_stay_validation_errors() {
        let error = PricingServiceError::from(EngineError::Validation(ValidationError::Quantity(
            QuantityError::TooSmall(0),
        )));

        assert_eq!(
            error,
            PricingServiceError::Validation(ValidationError::Quantity(QuantityError::TooSmall(0)))
        );
    }

    #[test]
    fn engine_faults_become_inconsistent_errors() {
        let fault = EngineError::InconsistentAudit {
            savings: Money::from_minor(10),
            audited: Money::from_minor(5),
        };

        assert_eq!(
            PricingServiceError::from(fault.clone()),
            PricingServiceError::Inconsistent(fault)
        );
    }

    #[test]
    fn catalog_not_found_becomes_not_found() {
        assert_eq!(
            PricingServiceError::from(CatalogError::NotFound),
            PricingServiceError::NotFound
        );
    }
}
