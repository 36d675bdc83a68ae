//! Container storage.
//!
//! The store owns the live container records. Reads and writes go through
//! scoped closures so the exclusive borrow taken for a mutation is released
//! before the calling operation returns.
mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryContainerStore;
pub use traits::{ContainerStore, ContainerStoreExt};
