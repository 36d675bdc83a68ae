//! Container inventory representation.
//!
//! A [`Container`] holds one [`ContainerRecord`] per base item, and each
//! record is split into [`StackInstance`]s that differ only in their sparse
//! override data. Records keep the host's native enumeration order, which is
//! the order every first-match scan observes.

use super::{BaseItem, FormId, Owner};

/// Ownership override slot on a stack instance.
///
/// The slot itself is structural: it either exists on an instance or it does
/// not. An existing slot may still name no owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnershipOverride {
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: Option<Owner>,
}

impl OwnershipOverride {
    pub const fn new(owner: Owner) -> Self {
        Self { owner: Some(owner) }
    }

    /// A slot that exists but names nobody.
    pub const fn empty() -> Self {
        Self { owner: None }
    }
}

/// Enchantment override slot (player-made enchantments).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentOverride {
    #[cfg_attr(feature = "serde", serde(default))]
    pub enchantment: Option<FormId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub charge: u16,
}

impl EnchantmentOverride {
    pub const fn new(enchantment: FormId, charge: u16) -> Self {
        Self {
            enchantment: Some(enchantment),
            charge,
        }
    }
}

/// One concrete pile of a base item inside a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackInstance {
    pub count: u32,
    /// Absent means "unowned".
    #[cfg_attr(feature = "serde", serde(default))]
    pub ownership: Option<OwnershipOverride>,
    /// Absent means "defer to the base item".
    #[cfg_attr(feature = "serde", serde(default))]
    pub enchantment: Option<EnchantmentOverride>,
}

impl StackInstance {
    pub const fn new(count: u32) -> Self {
        Self {
            count,
            ownership: None,
            enchantment: None,
        }
    }

    #[must_use]
    pub const fn with_ownership(mut self, ownership: OwnershipOverride) -> Self {
        self.ownership = Some(ownership);
        self
    }

    #[must_use]
    pub const fn owned_by(self, owner: Owner) -> Self {
        self.with_ownership(OwnershipOverride::new(owner))
    }

    #[must_use]
    pub const fn with_enchantment(mut self, enchantment: EnchantmentOverride) -> Self {
        self.enchantment = Some(enchantment);
        self
    }

    /// Owner named by this instance's ownership slot, if the slot exists and
    /// is filled.
    #[inline]
    pub fn owner(&self) -> Option<Owner> {
        self.ownership.and_then(|slot| slot.owner)
    }

    /// Enchantment named by this instance's enchantment slot, if any.
    #[inline]
    pub fn enchantment(&self) -> Option<FormId> {
        self.enchantment.and_then(|slot| slot.enchantment)
    }

    /// True if the instance carries no override data at all.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.ownership.is_none() && self.enchantment.is_none()
    }
}

/// All stacks of a single base item held by a container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerRecord {
    pub item: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub instances: Vec<StackInstance>,
}

impl ContainerRecord {
    pub fn new(item: FormId, instances: Vec<StackInstance>) -> Self {
        Self { item, instances }
    }

    /// Total count across the record's instances (saturating).
    pub fn count(&self) -> u32 {
        self.instances
            .iter()
            .fold(0u32, |total, instance| total.saturating_add(instance.count))
    }
}

/// Host-owned inventory of a single container reference.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    /// Handle of the container reference (chest, corpse, actor).
    pub handle: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub records: Vec<ContainerRecord>,
}

impl Container {
    /// Maximum total count the host stores for a single item.
    pub const MAX_ITEM_COUNT: u32 = i32::MAX as u32;

    pub fn new(handle: FormId) -> Self {
        Self {
            handle,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_record(mut self, record: ContainerRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.records.iter().all(|record| record.count() == 0)
    }

    /// Records for `item`, in enumeration order.
    pub fn records_for(&self, item: FormId) -> impl Iterator<Item = &ContainerRecord> + '_ {
        self.records.iter().filter(move |record| record.item == item)
    }

    /// Stack instances of `item`, in enumeration order.
    pub fn instances(&self, item: FormId) -> impl Iterator<Item = &StackInstance> + '_ {
        self.records_for(item)
            .flat_map(|record| record.instances.iter())
    }

    /// Mutable stack instances of `item`, in enumeration order.
    pub fn instances_mut(&mut self, item: FormId) -> impl Iterator<Item = &mut StackInstance> + '_ {
        self.records
            .iter_mut()
            .filter(move |record| record.item == item)
            .flat_map(|record| record.instances.iter_mut())
    }

    /// Total count of `item` held by this container.
    pub fn count(&self, item: FormId) -> u32 {
        self.records_for(item)
            .fold(0u32, |total, record| total.saturating_add(record.count()))
    }

    /// Returns true if the container holds at least one unit of `item`.
    pub fn contains(&self, item: FormId) -> bool {
        self.count(item) > 0
    }

    /// Stores `count` units of `item`, optionally under an ownership override.
    ///
    /// This is the host's storage primitive. Unowned units merge into an
    /// existing plain instance when one exists; owned units always form a new
    /// instance carrying an ownership slot. Returns false when nothing could be
    /// stored (zero count, or the item's total would exceed
    /// [`Self::MAX_ITEM_COUNT`]).
    pub fn add_object(&mut self, item: &BaseItem, count: u32, owner: Option<Owner>) -> bool {
        if count == 0 {
            return false;
        }
        let current = self.count(item.id);
        match current.checked_add(count) {
            Some(total) if total <= Self::MAX_ITEM_COUNT => {}
            _ => return false,
        }

        let index = match self.records.iter().position(|record| record.item == item.id) {
            Some(index) => index,
            None => {
                self.records.push(ContainerRecord::new(item.id, Vec::new()));
                self.records.len() - 1
            }
        };
        let record = &mut self.records[index];

        match owner {
            Some(owner) => record.instances.push(StackInstance::new(count).owned_by(owner)),
            None => match record.instances.iter_mut().find(|instance| instance.is_plain()) {
                Some(plain) => plain.count += count,
                None => record.instances.push(StackInstance::new(count)),
            },
        }
        true
    }
}
