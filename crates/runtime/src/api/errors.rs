//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the inventory rules, oracle access, the container store
//! and function dispatch so the script boundary can turn any of them into a
//! diagnostic plus a neutral return value.

use satchel_core::{ErrorContext, ErrorSeverity, FormId, GameError, InventoryError, OracleError};
use thiserror::Error;

use super::ScriptType;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{script}.{function} is not a bound function")]
    UnknownFunction { script: String, function: String },

    #[error("{function} expects {expected} arguments, got {provided}")]
    Arity {
        function: &'static str,
        expected: usize,
        provided: usize,
    },

    #[error("{function} argument {index} expects {expected}, got {provided}")]
    ArgumentType {
        function: &'static str,
        index: usize,
        expected: ScriptType,
        provided: String,
    },

    #[error("form {0} does not resolve in the catalog")]
    UnresolvedForm(FormId),

    #[error("failed to load content: {0}")]
    Content(String),
}

impl RuntimeError {
    /// Wraps a loader error, keeping its whole context chain in the message.
    pub fn content(err: anyhow::Error) -> Self {
        Self::Content(format!("{:#}", err))
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        use RuntimeError::*;
        match self {
            Inventory(err) => err.severity(),
            Oracle(err) => err.severity(),
            Repository(RepositoryError::ContainerNotFound(_)) => ErrorSeverity::Validation,
            Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Internal,
            UnknownFunction { .. } | Arity { .. } | ArgumentType { .. } => {
                ErrorSeverity::Validation
            }
            UnresolvedForm(_) => ErrorSeverity::Recoverable,
            Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Inventory(err) => err.context(),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        use RuntimeError::*;
        match self {
            Inventory(err) => err.error_code(),
            Oracle(err) => err.error_code(),
            Repository(RepositoryError::ContainerNotFound(_)) => "REPOSITORY_CONTAINER_NOT_FOUND",
            Repository(RepositoryError::LockPoisoned) => "REPOSITORY_LOCK_POISONED",
            UnknownFunction { .. } => "RUNTIME_UNKNOWN_FUNCTION",
            Arity { .. } => "RUNTIME_ARITY",
            ArgumentType { .. } => "RUNTIME_ARGUMENT_TYPE",
            UnresolvedForm(_) => "RUNTIME_UNRESOLVED_FORM",
            Content(_) => "RUNTIME_CONTENT",
        }
    }
}
