//! Container store contract.

use satchel_core::{Container, FormId};

use super::{RepositoryError, Result};

/// Store of live containers, keyed by container handle.
pub trait ContainerStore: Send + Sync {
    /// Insert or replace a container.
    fn insert(&self, container: Container) -> Result<()>;

    /// Check if a container is loaded
    fn contains(&self, handle: FormId) -> bool;

    /// Run `f` with shared access to a container.
    fn read(&self, handle: FormId, f: &mut dyn FnMut(&Container)) -> Result<()>;

    /// Run `f` with exclusive access to a container.
    fn modify(&self, handle: FormId, f: &mut dyn FnMut(&mut Container)) -> Result<()>;

    /// List all loaded container handles, sorted
    fn handles(&self) -> Result<Vec<FormId>>;
}

/// Typed helpers over [`ContainerStore`].
pub trait ContainerStoreExt: ContainerStore {
    /// Evaluates `f` against a container and returns its result.
    fn with_container<R>(&self, handle: FormId, f: impl FnOnce(&Container) -> R) -> Result<R> {
        let mut f = Some(f);
        let mut output = None;
        self.read(handle, &mut |container: &Container| {
            if let Some(f) = f.take() {
                output = Some(f(container));
            }
        })?;
        output.ok_or(RepositoryError::ContainerNotFound(handle))
    }

    /// Evaluates `f` against a container under exclusive access.
    fn with_container_mut<R>(
        &self,
        handle: FormId,
        f: impl FnOnce(&mut Container) -> R,
    ) -> Result<R> {
        let mut f = Some(f);
        let mut output = None;
        self.modify(handle, &mut |container: &mut Container| {
            if let Some(f) = f.take() {
                output = Some(f(container));
            }
        })?;
        output.ok_or(RepositoryError::ContainerNotFound(handle))
    }
}

impl<S> ContainerStoreExt for S where S: ContainerStore + ?Sized {}
