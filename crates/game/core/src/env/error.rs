//! Oracle access errors.
//!
//! Errors related to oracle availability and catalog lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::FormId;

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CatalogOracle is not available in the environment.
    #[error("CatalogOracle not available")]
    CatalogNotAvailable,

    /// IdentityOracle is not available in the environment.
    #[error("IdentityOracle not available")]
    IdentityNotAvailable,

    /// ValuationOracle is not available in the environment.
    #[error("ValuationOracle not available")]
    ValuationNotAvailable,

    /// Form id does not resolve to a base item.
    #[error("item {0} not found in catalog")]
    ItemNotFound(FormId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - no query can be answered
            CatalogNotAvailable | IdentityNotAvailable | ValuationNotAvailable => {
                ErrorSeverity::Fatal
            }

            // Not found errors are validation errors - invalid references
            ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            IdentityNotAvailable => "ORACLE_IDENTITY_NOT_AVAILABLE",
            ValuationNotAvailable => "ORACLE_VALUATION_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
