//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use satchel_core::{ActingIdentity, CatalogOracle, Container, SnapshotCatalogOracle};

use crate::loaders::{CatalogLoader, ContainerLoader, IdentityLoader, LoadResult};
use crate::mod_objects::ModObjectRegistry;
use crate::settings::SettingsReader;

/// Content factory that loads all satchel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron
/// ├── containers.ron
/// ├── identity.toml
/// ├── mod_objects.ron        (optional)
/// └── SKSE/Plugins/<Plugin>/
///     └── *.json             (settings)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load and index the catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<SnapshotCatalogOracle> {
        CatalogLoader::load_oracle(&self.data_dir.join("catalog.ron"))
    }

    /// Load container fixtures from `containers.ron`.
    pub fn load_containers(&self) -> LoadResult<Vec<Container>> {
        ContainerLoader::load(&self.data_dir.join("containers.ron"))
    }

    /// Load the acting identity from `identity.toml`.
    pub fn load_identity(&self) -> LoadResult<ActingIdentity> {
        IdentityLoader::load(&self.data_dir.join("identity.toml"))
    }

    /// Preload mod objects from `mod_objects.ron`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load_mod_objects<C>(&self, catalog: &C) -> LoadResult<Option<ModObjectRegistry>>
    where
        C: CatalogOracle + ?Sized,
    {
        let path = self.data_dir.join("mod_objects.ron");
        if !path.exists() {
            return Ok(None);
        }
        let spec = ModObjectRegistry::load_spec(&path)?;
        ModObjectRegistry::preload(&spec, catalog).map(Some)
    }

    /// Settings reader for `plugin`'s conventional folder.
    pub fn settings_reader(&self, plugin: &str) -> SettingsReader {
        SettingsReader::new(SettingsReader::plugin_folder(&self.data_dir, plugin))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
