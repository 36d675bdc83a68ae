//! Inventory data model.
//!
//! Catalog entries ([`BaseItem`], [`Enchantment`], [`MagicEffect`], ...) are
//! immutable and owned by the host catalog. [`Container`] is the host-owned
//! aggregate whose stack instances the resolution rules read and, for
//! ownership assignment and insertion, mutate in place.
pub mod types;

pub use types::{
    ActingIdentity, ActorBase, BaseItem, Container, ContainerRecord, Effect, Enchantment,
    EnchantmentOverride, FactionRecord, FormId, ItemCategory, ItemFlags, Keyword, MagicEffect,
    Owner, OwnershipOverride, StackInstance,
};
