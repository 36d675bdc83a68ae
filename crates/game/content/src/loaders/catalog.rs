//! Catalog loader.

use std::path::Path;

use satchel_core::{CatalogSnapshot, SnapshotCatalogOracle};

use crate::loaders::{LoadResult, read_file};

/// Loader for catalog snapshots from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog snapshot from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a CatalogSnapshot
    pub fn load(path: &Path) -> LoadResult<CatalogSnapshot> {
        let content = read_file(path)?;
        let snapshot: CatalogSnapshot = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        if snapshot.plugins.len() > usize::from(u8::MAX) + 1 {
            anyhow::bail!(
                "Catalog lists {} plugins, but at most 256 load slots exist",
                snapshot.plugins.len()
            );
        }

        tracing::debug!(
            items = snapshot.items.len(),
            enchantments = snapshot.enchantments.len(),
            magic_effects = snapshot.magic_effects.len(),
            "loaded catalog from {}",
            path.display()
        );
        Ok(snapshot)
    }

    /// Load and index a catalog in one step.
    ///
    /// Fails if one form id is defined as two different kinds.
    pub fn load_oracle(path: &Path) -> LoadResult<SnapshotCatalogOracle> {
        let oracle = SnapshotCatalogOracle::new(Self::load(path)?);
        if let Some((id, kept, skipped)) = oracle.kind_conflicts().first() {
            anyhow::bail!(
                "Form {} is defined as both {} and {} in {}",
                id,
                kept,
                skipped,
                path.display()
            );
        }
        Ok(oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::{CatalogOracle, FormId, FormKind, ItemCategory, ItemFlags};

    const CATALOG: &str = r#"(
        plugins: ["Skyrim.esm"],
        items: [
            (id: 15, category: currency, value: 1),
            (
                id: 0x12EB7,
                editor_id: Some("IronSword"),
                name: "Iron Sword",
                category: weapon,
                value: 25,
            ),
            (
                id: 0x1D4EC,
                category: light,
                flags: "CARRIABLE",
            ),
        ],
        keywords: [(id: 0x1CEAD, editor_id: "MagicDamageFire")],
    )"#;

    #[test]
    fn parses_catalog_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = CatalogLoader::load_oracle(&path).unwrap();
        let sword = catalog.item(FormId(0x12EB7)).unwrap();
        assert_eq!(sword.category, ItemCategory::Weapon);
        assert_eq!(sword.value, 25);
        assert_eq!(catalog.lookup_editor_id("IronSword"), Some(FormId(0x12EB7)));
        assert_eq!(catalog.form_kind(FormId(0x1CEAD)), Some(FormKind::Keyword));
        assert!(catalog.item(FormId(0x1D4EC)).unwrap().flags.contains(ItemFlags::CARRIABLE));
    }

    #[test]
    fn rejects_ids_shared_across_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron");
        std::fs::write(
            &path,
            r#"(
                items: [(id: 0x1CEAD, category: weapon)],
                keywords: [(id: 0x1CEAD, editor_id: "MagicDamageFire")],
            )"#,
        )
        .unwrap();

        let err = CatalogLoader::load_oracle(&path).unwrap_err();
        assert!(err.to_string().contains("defined as both item and keyword"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = CatalogLoader::load(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.ron"));
    }
}
