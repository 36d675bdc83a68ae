//! Container fixture loader.

use std::collections::HashSet;
use std::path::Path;

use satchel_core::Container;

use crate::loaders::{LoadResult, read_file};

/// Loader for container fixtures from RON files.
///
/// RON format: `Vec<Container>`. Records keep the file order, which becomes
/// the native enumeration order every first-match scan observes.
pub struct ContainerLoader;

impl ContainerLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Container>> {
        let content = read_file(path)?;
        let containers: Vec<Container> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse container RON: {}", e))?;

        let mut seen = HashSet::new();
        for container in &containers {
            if !seen.insert(container.handle) {
                anyhow::bail!(
                    "Container {} is defined more than once in {}",
                    container.handle,
                    path.display()
                );
            }

            let mut items = HashSet::new();
            for record in &container.records {
                if !items.insert(record.item) {
                    anyhow::bail!(
                        "Container {} lists item {} in more than one record in {}",
                        container.handle,
                        record.item,
                        path.display()
                    );
                }
            }
        }

        Ok(containers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::{FormId, Owner};

    #[test]
    fn keeps_instance_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("containers.ron");
        std::fs::write(
            &path,
            r#"[
                (
                    handle: 0x10F100,
                    records: [
                        (item: 0x12EB7, instances: [
                            (count: 1),
                            (count: 1, ownership: Some((owner: Some(Faction(0x29DA9))))),
                            (count: 2, ownership: Some((owner: Some(Actor(0x1A67B))))),
                        ]),
                    ],
                ),
            ]"#,
        )
        .unwrap();

        let containers = ContainerLoader::load(&path).unwrap();
        assert_eq!(containers.len(), 1);
        let owners: Vec<_> = containers[0]
            .instances(FormId(0x12EB7))
            .map(|instance| instance.owner())
            .collect();
        assert_eq!(
            owners,
            vec![
                None,
                Some(Owner::Faction(FormId(0x29DA9))),
                Some(Owner::Actor(FormId(0x1A67B))),
            ]
        );
    }

    #[test]
    fn rejects_duplicate_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("containers.ron");
        std::fs::write(&path, "[(handle: 1), (handle: 1)]").unwrap();

        let err = ContainerLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_duplicate_item_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("containers.ron");
        std::fs::write(
            &path,
            r#"[
                (
                    handle: 1,
                    records: [
                        (item: 0x100, instances: [(count: 1)]),
                        (item: 0x100, instances: [(count: 2)]),
                    ],
                ),
            ]"#,
        )
        .unwrap();

        let err = ContainerLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("more than one record"));
    }
}
