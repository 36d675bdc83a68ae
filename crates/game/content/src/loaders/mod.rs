//! Content loaders for reading satchel data from files.
//!
//! This module provides loaders that convert RON/TOML files into the core's
//! catalog, container and identity types.

pub mod catalog;
pub mod containers;
pub mod factory;
pub mod identity;

pub use catalog::CatalogLoader;
pub use containers::ContainerLoader;
pub use factory::ContentFactory;
pub use identity::IdentityLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
