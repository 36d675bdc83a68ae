//! Error types raised by container store implementations.

use satchel_core::FormId;
use thiserror::Error;

/// Errors surfaced by container store implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("container store lock was poisoned")]
    LockPoisoned,

    #[error("container {0} is not loaded")]
    ContainerNotFound(FormId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
