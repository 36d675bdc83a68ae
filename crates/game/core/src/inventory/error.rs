//! Inventory operation errors.

use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{FormId, ItemCategory};

/// Errors raised while validating or applying an inventory operation.
///
/// None of these is fatal to the host: the script boundary reports them as a
/// diagnostic and returns the operation's neutral value. Every variant except
/// `Oracle` carries an [`ErrorContext`] naming the operation and, where known,
/// the container and item involved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// A required container, item, or owner argument was absent.
    #[error("{} passed with at least 1 NONE argument", .context.operation.unwrap_or("operation"))]
    MissingArgument { context: ErrorContext },

    /// Stack count must be strictly positive.
    #[error("count must be positive (got {count})")]
    NonPositiveCount { count: i32, context: ErrorContext },

    /// Item does not resolve to a concrete bound object.
    #[error("form {item} is not a bound item")]
    NotBound { item: FormId, context: ErrorContext },

    /// Item category is outside the storable allow-list.
    #[error("item {item} of category {category} cannot be stored in a container")]
    NotStorable {
        item: FormId,
        category: ItemCategory,
        context: ErrorContext,
    },

    /// Owner argument is not of a kind that can own items.
    #[error("form {owner} cannot own items")]
    InvalidOwner { owner: FormId, context: ErrorContext },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl InventoryError {
    /// Absent-argument violation for `operation`.
    pub const fn missing_argument(operation: &'static str) -> Self {
        Self::MissingArgument {
            context: ErrorContext::new(operation),
        }
    }

    /// `item` is unknown to the catalog.
    pub const fn not_bound(item: FormId, context: ErrorContext) -> Self {
        Self::NotBound {
            item,
            context: context.with_item(item),
        }
    }

    /// `owner` names neither an actor nor the requested owner kind.
    pub const fn invalid_owner(owner: FormId, context: ErrorContext) -> Self {
        Self::InvalidOwner { owner, context }
    }
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            MissingArgument { .. } | NonPositiveCount { .. } | InvalidOwner { .. } => {
                ErrorSeverity::Validation
            }
            NotBound { .. } | NotStorable { .. } => ErrorSeverity::Recoverable,
            Oracle(err) => err.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        use InventoryError::*;
        match self {
            MissingArgument { context }
            | NonPositiveCount { context, .. }
            | NotBound { context, .. }
            | NotStorable { context, .. }
            | InvalidOwner { context, .. } => Some(context),
            Oracle(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            MissingArgument { .. } => "INVENTORY_MISSING_ARGUMENT",
            NonPositiveCount { .. } => "INVENTORY_NON_POSITIVE_COUNT",
            NotBound { .. } => "INVENTORY_NOT_BOUND",
            NotStorable { .. } => "INVENTORY_NOT_STORABLE",
            InvalidOwner { .. } => "INVENTORY_INVALID_OWNER",
            Oracle(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_names_the_operation() {
        let err = InventoryError::missing_argument("IsFormStolen");
        assert_eq!(
            err.to_string(),
            "IsFormStolen passed with at least 1 NONE argument"
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            err.context().and_then(|context| context.operation),
            Some("IsFormStolen")
        );
    }

    #[test]
    fn not_bound_names_the_item() {
        let context = ErrorContext::new("SetFormActorOwner").with_container(FormId(0x14));
        let err = InventoryError::not_bound(FormId(0xBAD), context);
        let context = err.context().unwrap();
        assert_eq!(context.container, Some(FormId(0x14)));
        assert_eq!(context.item, Some(FormId(0xBAD)));
        assert_eq!(err.error_code(), "INVENTORY_NOT_BOUND");
    }

    #[test]
    fn oracle_errors_keep_their_classification() {
        let err = InventoryError::from(OracleError::CatalogNotAvailable);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "ORACLE_CATALOG_NOT_AVAILABLE");
    }
}
