//! Base item catalog types.
//!
//! - `ItemCategory`: the fixed form-type enumeration consulted by classification
//! - `ItemFlags`: per-item boolean attributes
//! - `BaseItem`: immutable catalog entry shared by every stack of the item

use bitflags::bitflags;

use super::{Effect, FormId};

/// Form category of a base item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    /// Potions and poisons.
    Alchemy,
    Ammunition,
    Armor,
    Book,
    Ingredient,
    /// Leveled item list resolved by the host on insertion.
    LeveledItem,
    Key,
    Miscellaneous,
    Note,
    Scroll,
    SoulGem,
    Weapon,
    /// Light source; storable only when flagged carriable.
    Light,
    /// Gold and other coin. Never carries ownership.
    Currency,
    /// Never carries ownership.
    Lockpick,
    Activator,
    Furniture,
    Static,
    Spell,
}

impl ItemCategory {
    /// Returns true for currency and lockpicks, which are excluded from
    /// ownership semantics regardless of instance data.
    #[inline]
    pub const fn ignores_ownership(self) -> bool {
        matches!(self, Self::Currency | Self::Lockpick)
    }

    /// Returns true for categories that may carry an intrinsic enchantment.
    #[inline]
    pub const fn is_enchantable(self) -> bool {
        matches!(self, Self::Armor | Self::Weapon)
    }
}

bitflags! {
    /// Boolean attributes of a [`BaseItem`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemFlags: u8 {
        /// Carries intrinsic magical effects (potions, scrolls, ingredients).
        const MAGIC_ITEM = 1 << 0;
        /// Light source that can be picked up.
        const CARRIABLE  = 1 << 1;
    }
}

/// Immutable catalog entry describing an item type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseItem {
    pub id: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ItemFlags,
    /// Intrinsic ("factory") enchantment, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub enchantment: Option<FormId>,
    /// Flat gold value used for non-magic items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,
    /// Effects of a magic item, consumed by the valuation formula.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
}

impl BaseItem {
    pub fn new(id: FormId, category: ItemCategory) -> Self {
        Self {
            id,
            editor_id: None,
            name: String::new(),
            category,
            flags: ItemFlags::empty(),
            enchantment: None,
            value: 0,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_enchantment(mut self, enchantment: FormId) -> Self {
        self.enchantment = Some(enchantment);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }

    #[inline]
    pub fn is_magic_item(&self) -> bool {
        self.flags.contains(ItemFlags::MAGIC_ITEM)
    }

    #[inline]
    pub fn is_carriable(&self) -> bool {
        self.flags.contains(ItemFlags::CARRIABLE)
    }

    /// Intrinsic enchantment, reported only for enchantable categories.
    #[inline]
    pub fn intrinsic_enchantment(&self) -> Option<FormId> {
        if self.category.is_enchantable() {
            self.enchantment
        } else {
            None
        }
    }
}
