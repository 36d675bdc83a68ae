//! Read-only catalog of forms consulted by the resolution rules.

use crate::state::{BaseItem, Enchantment, FormId, MagicEffect, Owner};

/// Kind of form an identifier resolves to in the catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FormKind {
    /// Bound object that can live in a container.
    Item,
    Enchantment,
    MagicEffect,
    Keyword,
    /// Non-player character base.
    Actor,
    Faction,
}

/// Provides catalog definitions (items, enchantments, effects, identities).
///
/// Implementations are immutable for the duration of a call. Lookups return
/// `None` for unknown identifiers; callers decide whether that is an error.
pub trait CatalogOracle: Send + Sync {
    /// Returns the kind of form `id` names, if the catalog knows it.
    fn form_kind(&self, id: FormId) -> Option<FormKind>;

    fn item(&self, id: FormId) -> Option<&BaseItem>;

    fn enchantment(&self, id: FormId) -> Option<&Enchantment>;

    fn magic_effect(&self, id: FormId) -> Option<&MagicEffect>;

    /// Case-insensitive editor id lookup.
    fn lookup_editor_id(&self, editor_id: &str) -> Option<FormId>;

    /// Load-order index of a plugin file, matched case-insensitively.
    fn plugin_index(&self, plugin: &str) -> Option<u8>;

    /// Narrows `id` to an owner identity.
    ///
    /// Only actor bases and factions can own items; every other form kind
    /// (and unknown ids) yields `None`.
    fn owner(&self, id: FormId) -> Option<Owner> {
        match self.form_kind(id)? {
            FormKind::Actor => Some(Owner::Actor(id)),
            FormKind::Faction => Some(Owner::Faction(id)),
            _ => None,
        }
    }
}
