pub mod common;
pub mod container;
pub mod item;
pub mod magic;
pub mod owner;

// Re-export common types
pub use common::FormId;

// Re-export container representation
pub use container::{
    Container, ContainerRecord, EnchantmentOverride, OwnershipOverride, StackInstance,
};

// Re-export item catalog types
pub use item::{BaseItem, ItemCategory, ItemFlags};

// Re-export magic catalog types
pub use magic::{Effect, Enchantment, Keyword, MagicEffect};

// Re-export ownership types
pub use owner::{ActingIdentity, ActorBase, FactionRecord, Owner};
