//! In-memory ContainerStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use satchel_core::{Container, FormId};

use super::{ContainerStore, RepositoryError, Result};

/// In-memory implementation of ContainerStore.
pub struct InMemoryContainerStore {
    containers: RwLock<HashMap<FormId, Container>>,
}

impl InMemoryContainerStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            containers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with `containers`.
    pub fn with_containers(containers: impl IntoIterator<Item = Container>) -> Self {
        let containers = containers
            .into_iter()
            .map(|container| (container.handle, container))
            .collect();
        Self {
            containers: RwLock::new(containers),
        }
    }
}

impl Default for InMemoryContainerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerStore for InMemoryContainerStore {
    fn insert(&self, container: Container) -> Result<()> {
        let mut containers = self
            .containers
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        containers.insert(container.handle, container);
        Ok(())
    }

    fn contains(&self, handle: FormId) -> bool {
        self.containers
            .read()
            .map(|containers| containers.contains_key(&handle))
            .unwrap_or(false)
    }

    fn read(&self, handle: FormId, f: &mut dyn FnMut(&Container)) -> Result<()> {
        let containers = self
            .containers
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let container = containers
            .get(&handle)
            .ok_or(RepositoryError::ContainerNotFound(handle))?;
        f(container);
        Ok(())
    }

    fn modify(&self, handle: FormId, f: &mut dyn FnMut(&mut Container)) -> Result<()> {
        let mut containers = self
            .containers
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let container = containers
            .get_mut(&handle)
            .ok_or(RepositoryError::ContainerNotFound(handle))?;
        f(container);
        Ok(())
    }

    fn handles(&self) -> Result<Vec<FormId>> {
        let containers = self
            .containers
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut handles: Vec<FormId> = containers.keys().copied().collect();
        handles.sort_unstable();
        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ContainerStoreExt;
    use satchel_core::{BaseItem, ItemCategory};

    const CHEST: FormId = FormId(0x000F_1001);
    const SWORD: FormId = FormId(0x0001_2EB7);

    #[test]
    fn scoped_mutation_is_visible_to_later_reads() {
        let store = InMemoryContainerStore::with_containers([Container::new(CHEST)]);
        let sword = BaseItem::new(SWORD, ItemCategory::Weapon);

        let stored = store
            .with_container_mut(CHEST, |container| container.add_object(&sword, 2, None))
            .unwrap();
        assert!(stored);
        assert_eq!(
            store.with_container(CHEST, |container| container.count(SWORD)).unwrap(),
            2
        );
    }

    #[test]
    fn unknown_handles_are_reported() {
        let store = InMemoryContainerStore::new();
        assert!(matches!(
            store.with_container(CHEST, |_| ()),
            Err(RepositoryError::ContainerNotFound(CHEST))
        ));
        assert!(!store.contains(CHEST));
    }

    #[test]
    fn handles_are_sorted() {
        let store = InMemoryContainerStore::with_containers([
            Container::new(FormId(3)),
            Container::new(FormId(1)),
        ]);
        store.insert(Container::new(FormId(2))).unwrap();
        assert_eq!(store.handles().unwrap(), vec![FormId(1), FormId(2), FormId(3)]);
    }
}
