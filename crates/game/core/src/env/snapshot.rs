//! In-memory catalog snapshots.
//!
//! # Design
//!
//! - **Snapshot**: serializable structure listing every catalog record
//! - **Oracle**: [`SnapshotCatalogOracle`] indexes a snapshot for lookups
//!
//! Loaders produce snapshots from data files; tests build them directly.

use std::collections::HashMap;

use super::{CatalogOracle, FormKind};
use crate::state::{
    ActorBase, BaseItem, Enchantment, FactionRecord, FormId, Keyword, MagicEffect,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete catalog contents.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSnapshot {
    /// Plugin files in load order; position is the load index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub plugins: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<BaseItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enchantments: Vec<Enchantment>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_effects: Vec<MagicEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<Keyword>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors: Vec<ActorBase>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub factions: Vec<FactionRecord>,
}

impl CatalogSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, item: BaseItem) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantments.push(enchantment);
        self
    }

    #[must_use]
    pub fn with_magic_effect(mut self, effect: MagicEffect) -> Self {
        self.magic_effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    #[must_use]
    pub fn with_actor(mut self, actor: ActorBase) -> Self {
        self.actors.push(actor);
        self
    }

    #[must_use]
    pub fn with_faction(mut self, faction: FactionRecord) -> Self {
        self.factions.push(faction);
        self
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.push(plugin.into());
        self
    }
}

/// [`CatalogOracle`] backed by an indexed [`CatalogSnapshot`].
///
/// Later records with a duplicate form id replace earlier ones of the same
/// kind, matching how plugin overrides win in load order. A record whose id is
/// already taken by another kind is skipped and listed in
/// [`kind_conflicts`](Self::kind_conflicts).
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalogOracle {
    kinds: HashMap<FormId, FormKind>,
    conflicts: Vec<(FormId, FormKind, FormKind)>,
    items: HashMap<FormId, BaseItem>,
    enchantments: HashMap<FormId, Enchantment>,
    magic_effects: HashMap<FormId, MagicEffect>,
    editor_ids: HashMap<String, FormId>,
    plugins: HashMap<String, u8>,
}

impl SnapshotCatalogOracle {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        let mut oracle = Self::default();

        for (index, plugin) in snapshot.plugins.into_iter().enumerate() {
            if let Ok(index) = u8::try_from(index) {
                oracle.plugins.insert(plugin.to_ascii_lowercase(), index);
            }
        }

        for item in snapshot.items {
            if oracle.register(item.id, FormKind::Item, item.editor_id.as_deref()) {
                oracle.items.insert(item.id, item);
            }
        }
        for enchantment in snapshot.enchantments {
            if oracle.register(
                enchantment.id,
                FormKind::Enchantment,
                enchantment.editor_id.as_deref(),
            ) {
                oracle.enchantments.insert(enchantment.id, enchantment);
            }
        }
        for effect in snapshot.magic_effects {
            if oracle.register(effect.id, FormKind::MagicEffect, effect.editor_id.as_deref()) {
                oracle.magic_effects.insert(effect.id, effect);
            }
        }
        for keyword in snapshot.keywords {
            oracle.register(keyword.id, FormKind::Keyword, Some(&keyword.editor_id));
        }
        for actor in snapshot.actors {
            oracle.register(actor.id, FormKind::Actor, actor.editor_id.as_deref());
        }
        for faction in snapshot.factions {
            oracle.register(faction.id, FormKind::Faction, faction.editor_id.as_deref());
        }

        oracle
    }

    /// Claims `id` for `kind`. Returns false when another kind already owns it.
    fn register(&mut self, id: FormId, kind: FormKind, editor_id: Option<&str>) -> bool {
        match self.kinds.get(&id) {
            Some(&existing) if existing != kind => {
                self.conflicts.push((id, existing, kind));
                return false;
            }
            _ => {}
        }
        self.kinds.insert(id, kind);
        if let Some(editor_id) = editor_id {
            self.editor_ids.insert(editor_id.to_ascii_lowercase(), id);
        }
        true
    }

    /// Records skipped because their id was already defined as another kind,
    /// as `(id, kept kind, skipped kind)`.
    pub fn kind_conflicts(&self) -> &[(FormId, FormKind, FormKind)] {
        &self.conflicts
    }

    /// Number of forms known to the catalog.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl From<CatalogSnapshot> for SnapshotCatalogOracle {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self::new(snapshot)
    }
}

impl CatalogOracle for SnapshotCatalogOracle {
    fn form_kind(&self, id: FormId) -> Option<FormKind> {
        self.kinds.get(&id).copied()
    }

    fn item(&self, id: FormId) -> Option<&BaseItem> {
        self.items.get(&id)
    }

    fn enchantment(&self, id: FormId) -> Option<&Enchantment> {
        self.enchantments.get(&id)
    }

    fn magic_effect(&self, id: FormId) -> Option<&MagicEffect> {
        self.magic_effects.get(&id)
    }

    fn lookup_editor_id(&self, editor_id: &str) -> Option<FormId> {
        self.editor_ids.get(&editor_id.to_ascii_lowercase()).copied()
    }

    fn plugin_index(&self, plugin: &str) -> Option<u8> {
        self.plugins.get(&plugin.to_ascii_lowercase()).copied()
    }
}
