//! Item classification.

use crate::state::{BaseItem, ItemCategory};

/// Returns true if `item` may be stored in a container.
///
/// The allow-list is fixed: alchemy, ammunition, armor, book, ingredient,
/// leveled item, key, miscellaneous, note, scroll, soul gem and weapon. Light
/// sources qualify only when flagged carriable. Everything else, including
/// currency and lockpicks, is rejected.
pub fn is_storable(item: &BaseItem) -> bool {
    use ItemCategory::*;
    match item.category {
        Alchemy | Ammunition | Armor | Book | Ingredient | LeveledItem | Key | Miscellaneous
        | Note | Scroll | SoulGem | Weapon => true,
        Light => item.is_carriable(),
        Currency | Lockpick | Activator | Furniture | Static | Spell => false,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::state::{FormId, ItemFlags};

    fn item(category: ItemCategory) -> BaseItem {
        BaseItem::new(FormId(0x100), category)
    }

    #[test]
    fn allow_list_is_exact() {
        let storable: Vec<_> = ItemCategory::iter()
            .filter(|category| is_storable(&item(*category)))
            .collect();

        assert_eq!(
            storable,
            vec![
                ItemCategory::Alchemy,
                ItemCategory::Ammunition,
                ItemCategory::Armor,
                ItemCategory::Book,
                ItemCategory::Ingredient,
                ItemCategory::LeveledItem,
                ItemCategory::Key,
                ItemCategory::Miscellaneous,
                ItemCategory::Note,
                ItemCategory::Scroll,
                ItemCategory::SoulGem,
                ItemCategory::Weapon,
            ]
        );
    }

    #[test]
    fn lights_need_the_carriable_flag() {
        let torch = item(ItemCategory::Light);
        assert!(!is_storable(&torch));
        assert!(is_storable(&torch.with_flags(ItemFlags::CARRIABLE)));
    }

    #[test]
    fn currency_and_lockpicks_are_not_storable() {
        assert!(!is_storable(&item(ItemCategory::Currency)));
        assert!(!is_storable(&item(ItemCategory::Lockpick)));
    }
}
