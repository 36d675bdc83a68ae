//! Validated stack insertion.

use super::{InventoryError, InventoryTransition, is_storable};
use crate::env::GameEnv;
use crate::state::{Container, FormId, Owner};

/// Result of an insertion that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Host storage signal, passed through unchanged.
    pub stored: bool,
    /// Owner the new stack was stored under.
    pub owner: Option<Owner>,
    /// Owner argument that named neither an actor nor a faction and was
    /// therefore ignored.
    pub dropped_owner: Option<FormId>,
}

/// Inserts `count` units of `item`, optionally owned by `owner`.
///
/// An owner form that is neither an actor nor a faction is dropped rather than
/// failing the insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertStackAction {
    pub item: FormId,
    pub count: i32,
    pub owner: Option<FormId>,
}

impl InsertStackAction {
    pub fn new(item: FormId, count: i32) -> Self {
        Self {
            item,
            count,
            owner: None,
        }
    }

    #[must_use]
    pub fn with_owner(mut self, owner: FormId) -> Self {
        self.owner = Some(owner);
        self
    }
}

impl InventoryTransition for InsertStackAction {
    type Error = InventoryError;
    type Output = InsertOutcome;

    fn operation(&self) -> &'static str {
        "AddFormWithOwner"
    }

    fn pre_validate(&self, container: &Container, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let context = self.error_context(container).with_item(self.item);
        if self.count <= 0 {
            return Err(InventoryError::NonPositiveCount {
                count: self.count,
                context,
            });
        }

        let catalog = env.catalog()?;
        let item = catalog
            .item(self.item)
            .ok_or(InventoryError::not_bound(self.item, context))?;
        if !is_storable(item) {
            return Err(InventoryError::NotStorable {
                item: item.id,
                category: item.category,
                context,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        container: &mut Container,
        env: &GameEnv<'_>,
    ) -> Result<InsertOutcome, Self::Error> {
        let context = self.error_context(container).with_item(self.item);
        let catalog = env.catalog()?;
        let item = catalog
            .item(self.item)
            .ok_or(InventoryError::not_bound(self.item, context))?;

        let owner = self.owner.and_then(|owner| catalog.owner(owner));
        let dropped_owner = self.owner.filter(|_| owner.is_none());
        let count = u32::try_from(self.count).map_err(|_| InventoryError::NonPositiveCount {
            count: self.count,
            context,
        })?;

        Ok(InsertOutcome {
            stored: container.add_object(item, count, owner),
            owner,
            dropped_owner,
        })
    }
}
