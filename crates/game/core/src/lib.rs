//! Inventory override resolution shared by every satchel front end.
//!
//! `satchel-core` defines the data model of a host container (records split
//! into stack instances with sparse ownership and enchantment overrides) and
//! the pure rules that resolve owners, theft, enchantments and gold values
//! over it. Host collaborators are reached only through the oracles in
//! [`env`], and mutations flow through [`inventory::execute`].
pub mod env;
pub mod error;
pub mod inventory;
pub mod state;

pub use env::{
    CatalogOracle, CatalogSnapshot, EffectWeightedValuation, Env, FormKind, GameEnv,
    IdentityOracle, OracleError, SnapshotCatalogOracle, ValuationOracle,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use inventory::{
    InsertOutcome, InsertStackAction, InventoryError, InventoryTransition, SetOwnerAction,
    count_enchanted_with_keyword, execute, is_stolen, is_storable, record_enchantment,
    resolve_enchantment, resolve_owner, saturate_gold, total_value,
};
pub use state::{
    ActingIdentity, ActorBase, BaseItem, Container, ContainerRecord, Effect, Enchantment,
    EnchantmentOverride, FactionRecord, FormId, ItemCategory, ItemFlags, Keyword, MagicEffect,
    Owner, OwnershipOverride, StackInstance,
};
