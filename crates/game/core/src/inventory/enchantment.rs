//! Effective enchantment resolution and keyword tally.
//!
//! An item's intrinsic enchantment always wins. Instance overrides are only
//! consulted when the base item is not enchantable or carries none, and then
//! the first instance naming an enchantment wins.

use std::collections::HashSet;

use crate::env::CatalogOracle;
use crate::state::{BaseItem, Container, ContainerRecord, FormId};

/// Effective enchantment of `item` inside `container`.
///
/// Returns `None` when the container holds no units of `item`.
pub fn resolve_enchantment(container: &Container, item: &BaseItem) -> Option<FormId> {
    if !container.contains(item.id) {
        return None;
    }
    if let Some(intrinsic) = item.intrinsic_enchantment() {
        return Some(intrinsic);
    }
    container
        .instances(item.id)
        .find_map(|instance| instance.enchantment())
}

/// Effective enchantment of a single container record.
///
/// Records whose base item is unknown to the catalog can still resolve through
/// their instance overrides.
pub fn record_enchantment<C>(record: &ContainerRecord, catalog: &C) -> Option<FormId>
where
    C: CatalogOracle + ?Sized,
{
    if let Some(intrinsic) = catalog
        .item(record.item)
        .and_then(BaseItem::intrinsic_enchantment)
    {
        return Some(intrinsic);
    }
    record
        .instances
        .iter()
        .find_map(|instance| instance.enchantment())
}

/// Number of records in `container` whose effective enchantment has at least
/// one effect tagged with `keyword`.
///
/// Each distinct base item contributes at most once, even if the container
/// splits it across several records. Enchantments or effects missing from the
/// catalog never qualify.
pub fn count_enchanted_with_keyword<C>(container: &Container, keyword: FormId, catalog: &C) -> u32
where
    C: CatalogOracle + ?Sized,
{
    let qualifies = |enchantment: FormId| {
        catalog.enchantment(enchantment).is_some_and(|enchantment| {
            enchantment.effects.iter().any(|effect| {
                catalog
                    .magic_effect(effect.base_effect)
                    .is_some_and(|base| base.has_keyword(keyword))
            })
        })
    };

    let items: HashSet<FormId> = container
        .records
        .iter()
        .filter(|record| record.count() > 0)
        .filter(|record| record_enchantment(record, catalog).is_some_and(&qualifies))
        .map(|record| record.item)
        .collect();
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogSnapshot, SnapshotCatalogOracle};
    use crate::state::{
        Effect, Enchantment, EnchantmentOverride, ItemCategory, Keyword, MagicEffect,
        StackInstance,
    };

    const CHEST: FormId = FormId(0x0010_0000);
    const FIRE_SWORD: FormId = FormId(0x0001_0001);
    const PLAIN_SWORD: FormId = FormId(0x0001_0002);
    const CIRCLET: FormId = FormId(0x0001_0003);
    const BOOK: FormId = FormId(0x0001_0004);

    const ENCH_FIRE: FormId = FormId(0x0004_0001);
    const ENCH_FROST: FormId = FormId(0x0004_0002);
    const EFFECT_FIRE: FormId = FormId(0x0005_0001);
    const EFFECT_FROST: FormId = FormId(0x0005_0002);
    const KW_FIRE: FormId = FormId(0x0006_0001);
    const KW_FROST: FormId = FormId(0x0006_0002);

    fn catalog() -> SnapshotCatalogOracle {
        CatalogSnapshot::empty()
            .with_keyword(Keyword::new(KW_FIRE, "MagicDamageFire"))
            .with_keyword(Keyword::new(KW_FROST, "MagicDamageFrost"))
            .with_magic_effect(MagicEffect::new(EFFECT_FIRE, 1.0, vec![KW_FIRE]))
            .with_magic_effect(MagicEffect::new(EFFECT_FROST, 1.0, vec![KW_FROST]))
            .with_enchantment(Enchantment::new(
                ENCH_FIRE,
                vec![Effect::new(EFFECT_FIRE, 10.0, 0)],
            ))
            .with_enchantment(Enchantment::new(
                ENCH_FROST,
                vec![Effect::new(EFFECT_FROST, 10.0, 0)],
            ))
            .with_item(BaseItem::new(FIRE_SWORD, ItemCategory::Weapon).with_enchantment(ENCH_FIRE))
            .with_item(BaseItem::new(PLAIN_SWORD, ItemCategory::Weapon))
            .with_item(BaseItem::new(CIRCLET, ItemCategory::Armor))
            .with_item(BaseItem::new(BOOK, ItemCategory::Book))
            .into()
    }

    fn frost_override() -> StackInstance {
        StackInstance::new(1).with_enchantment(EnchantmentOverride::new(ENCH_FROST, 500))
    }

    #[test]
    fn intrinsic_beats_instance_override() {
        let catalog = catalog();
        let sword = catalog.item(FIRE_SWORD).unwrap();
        let container = Container::new(CHEST)
            .with_record(ContainerRecord::new(FIRE_SWORD, vec![frost_override()]));

        assert_eq!(resolve_enchantment(&container, sword), Some(ENCH_FIRE));
    }

    #[test]
    fn first_override_wins_without_intrinsic() {
        let catalog = catalog();
        let sword = catalog.item(PLAIN_SWORD).unwrap();
        let container = Container::new(CHEST).with_record(ContainerRecord::new(
            PLAIN_SWORD,
            vec![
                StackInstance::new(1),
                frost_override(),
                StackInstance::new(1).with_enchantment(EnchantmentOverride::new(ENCH_FIRE, 0)),
            ],
        ));

        assert_eq!(resolve_enchantment(&container, sword), Some(ENCH_FROST));
    }

    #[test]
    fn absent_item_has_no_enchantment() {
        let catalog = catalog();
        let sword = catalog.item(FIRE_SWORD).unwrap();
        let container = Container::new(CHEST)
            .with_record(ContainerRecord::new(PLAIN_SWORD, vec![StackInstance::new(1)]));

        assert_eq!(resolve_enchantment(&container, sword), None);
    }

    #[test]
    fn non_enchantable_intrinsic_is_ignored() {
        let book = BaseItem::new(BOOK, ItemCategory::Book).with_enchantment(ENCH_FIRE);
        let container =
            Container::new(CHEST).with_record(ContainerRecord::new(BOOK, vec![frost_override()]));

        assert_eq!(resolve_enchantment(&container, &book), Some(ENCH_FROST));
    }

    #[test]
    fn tally_counts_each_record_once() {
        let catalog = catalog();
        let container = Container::new(CHEST)
            .with_record(ContainerRecord::new(FIRE_SWORD, vec![StackInstance::new(2)]))
            .with_record(ContainerRecord::new(
                PLAIN_SWORD,
                vec![frost_override(), frost_override(), frost_override()],
            ))
            .with_record(ContainerRecord::new(CIRCLET, vec![frost_override()]))
            .with_record(ContainerRecord::new(BOOK, vec![StackInstance::new(1)]));

        assert_eq!(count_enchanted_with_keyword(&container, KW_FIRE, &catalog), 1);
        assert_eq!(count_enchanted_with_keyword(&container, KW_FROST, &catalog), 2);
    }

    #[test]
    fn split_records_of_one_item_count_once() {
        let catalog = catalog();
        let container = Container::new(CHEST)
            .with_record(ContainerRecord::new(FIRE_SWORD, vec![StackInstance::new(1)]))
            .with_record(ContainerRecord::new(FIRE_SWORD, vec![StackInstance::new(3)]));

        assert_eq!(count_enchanted_with_keyword(&container, KW_FIRE, &catalog), 1);
    }

    #[test]
    fn intrinsic_shadows_overrides_in_tally() {
        let catalog = catalog();
        let container = Container::new(CHEST)
            .with_record(ContainerRecord::new(FIRE_SWORD, vec![frost_override()]));

        assert_eq!(count_enchanted_with_keyword(&container, KW_FROST, &catalog), 0);
    }

    #[test]
    fn tally_of_empty_container_is_zero() {
        let catalog = catalog();
        assert_eq!(
            count_enchanted_with_keyword(&Container::new(CHEST), KW_FIRE, &catalog),
            0
        );
    }

    #[test]
    fn unknown_enchantments_do_not_qualify() {
        let catalog = catalog();
        let container = Container::new(CHEST).with_record(ContainerRecord::new(
            PLAIN_SWORD,
            vec![StackInstance::new(1).with_enchantment(EnchantmentOverride::new(FormId(0xBAD), 0))],
        ));
        assert_eq!(count_enchanted_with_keyword(&container, KW_FIRE, &catalog), 0);
    }
}
