//! Acting identity loader.

use std::path::Path;

use satchel_core::ActingIdentity;

use crate::loaders::{LoadResult, read_file};

/// Loader for the acting identity from TOML files.
///
/// ```toml
/// actor = 0x7
/// factions = [0x29DA9, 0x48362]
/// ```
pub struct IdentityLoader;

impl IdentityLoader {
    pub fn load(path: &Path) -> LoadResult<ActingIdentity> {
        let content = read_file(path)?;
        let identity: ActingIdentity = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse identity TOML: {}", e))?;

        Ok(identity)
    }
}
