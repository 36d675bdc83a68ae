//! Owner resolution and assignment.

use super::{InventoryError, InventoryTransition};
use crate::env::GameEnv;
use crate::state::{BaseItem, Container, FormId, Owner};

/// Resolves the effective owner of `item` inside `container`.
///
/// Currency and lockpicks never carry ownership. Otherwise the owner named by
/// the first instance whose ownership slot is filled wins; later siblings are
/// never consulted.
pub fn resolve_owner(container: &Container, item: &BaseItem) -> Option<Owner> {
    if item.category.ignores_ownership() {
        return None;
    }

    container
        .instances(item.id)
        .find_map(|instance| instance.owner())
}

/// Rewrites the owner of every instance of `item` that already has an
/// ownership slot.
///
/// Instances without a slot are left untouched: slots are structural and are
/// never created by this operation. The output is the number of instances
/// rewritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetOwnerAction {
    pub item: FormId,
    pub owner: Owner,
}

impl SetOwnerAction {
    pub fn new(item: FormId, owner: Owner) -> Self {
        Self { item, owner }
    }
}

impl InventoryTransition for SetOwnerAction {
    type Error = InventoryError;
    type Output = usize;

    fn operation(&self) -> &'static str {
        match self.owner {
            Owner::Actor(_) => "SetFormActorOwner",
            Owner::Faction(_) => "SetFormFactionOwner",
        }
    }

    fn pre_validate(&self, container: &Container, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let catalog = env.catalog()?;
        if catalog.item(self.item).is_none() {
            return Err(InventoryError::not_bound(
                self.item,
                self.error_context(container),
            ));
        }
        Ok(())
    }

    fn apply(&self, container: &mut Container, _env: &GameEnv<'_>) -> Result<usize, Self::Error> {
        let mut touched = 0;
        for instance in container.instances_mut(self.item) {
            if let Some(slot) = instance.ownership.as_mut() {
                slot.owner = Some(self.owner);
                touched += 1;
            }
        }
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogOracle, CatalogSnapshot, SnapshotCatalogOracle};
    use crate::error::GameError;
    use crate::inventory::execute;
    use crate::state::{ContainerRecord, ItemCategory, OwnershipOverride, StackInstance};

    const CHEST: FormId = FormId(0x0010_0000);
    const SWORD: FormId = FormId(0x0001_2EB7);
    const LOCKPICK: FormId = FormId(0x0000_000A);
    const GUARD: FormId = FormId(0x0002_0001);
    const MERCHANT: FormId = FormId(0x0002_0002);
    const GUILD: FormId = FormId(0x0003_0001);

    fn sword() -> BaseItem {
        BaseItem::new(SWORD, ItemCategory::Weapon)
    }

    fn catalog() -> SnapshotCatalogOracle {
        CatalogSnapshot::empty()
            .with_item(sword())
            .with_item(BaseItem::new(LOCKPICK, ItemCategory::Lockpick))
            .into()
    }

    fn env(catalog: &SnapshotCatalogOracle) -> GameEnv<'_> {
        let catalog: &dyn CatalogOracle = catalog;
        GameEnv::new(Some(catalog), None, None)
    }

    fn chest(instances: Vec<StackInstance>) -> Container {
        Container::new(CHEST).with_record(ContainerRecord::new(SWORD, instances))
    }

    #[test]
    fn first_filled_slot_wins() {
        let container = chest(vec![
            StackInstance::new(1),
            StackInstance::new(1).with_ownership(OwnershipOverride::empty()),
            StackInstance::new(1).owned_by(Owner::Faction(GUILD)),
            StackInstance::new(1).owned_by(Owner::Actor(GUARD)),
        ]);

        assert_eq!(resolve_owner(&container, &sword()), Some(Owner::Faction(GUILD)));
    }

    #[test]
    fn no_override_means_no_owner() {
        let container = chest(vec![StackInstance::new(3)]);
        assert_eq!(resolve_owner(&container, &sword()), None);
    }

    #[test]
    fn lockpicks_never_resolve_an_owner() {
        let lockpick = BaseItem::new(LOCKPICK, ItemCategory::Lockpick);
        let container = Container::new(CHEST).with_record(ContainerRecord::new(
            LOCKPICK,
            vec![StackInstance::new(5).owned_by(Owner::Actor(GUARD))],
        ));

        assert_eq!(resolve_owner(&container, &lockpick), None);
    }

    #[test]
    fn set_owner_rewrites_existing_slots_only() {
        let catalog = catalog();
        let env = env(&catalog);
        let mut container = chest(vec![
            StackInstance::new(2),
            StackInstance::new(1).owned_by(Owner::Actor(GUARD)),
            StackInstance::new(1).with_ownership(OwnershipOverride::empty()),
        ]);

        let action = SetOwnerAction::new(SWORD, Owner::Actor(MERCHANT));
        let touched = execute(&action, &mut container, &env).unwrap();

        assert_eq!(touched, 2);
        let owners: Vec<_> = container.instances(SWORD).map(|i| i.owner()).collect();
        assert_eq!(
            owners,
            vec![None, Some(Owner::Actor(MERCHANT)), Some(Owner::Actor(MERCHANT))]
        );
        assert_eq!(resolve_owner(&container, &sword()), Some(Owner::Actor(MERCHANT)));
    }

    #[test]
    fn set_owner_without_slots_touches_nothing() {
        let catalog = catalog();
        let env = env(&catalog);
        let mut container = chest(vec![StackInstance::new(2)]);

        let action = SetOwnerAction::new(SWORD, Owner::Faction(GUILD));
        assert_eq!(execute(&action, &mut container, &env), Ok(0));
        assert_eq!(resolve_owner(&container, &sword()), None);
    }

    #[test]
    fn set_owner_rejects_unbound_forms() {
        let catalog = catalog();
        let env = env(&catalog);
        let mut container = chest(vec![StackInstance::new(1).owned_by(Owner::Actor(GUARD))]);

        let action = SetOwnerAction::new(GUILD, Owner::Actor(MERCHANT));
        let err = execute(&action, &mut container, &env).unwrap_err();
        assert!(matches!(err, InventoryError::NotBound { item: GUILD, .. }));

        let context = err.context().unwrap();
        assert_eq!(context.operation, Some("SetFormActorOwner"));
        assert_eq!(context.container, Some(CHEST));
        assert_eq!(context.item, Some(GUILD));
    }
}
