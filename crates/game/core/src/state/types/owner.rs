//! Ownership identities.

use std::collections::BTreeSet;
use std::fmt;

use super::FormId;

/// Owner named by an ownership override.
///
/// There is no "player" variant: player ownership is either the absence of an
/// override or an [`Owner::Actor`] equal to the player's own identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    /// A specific non-player character (actor base form).
    Actor(FormId),
    /// A group identity.
    Faction(FormId),
}

impl Owner {
    /// Form id of the owner regardless of variant.
    #[inline]
    pub const fn form(self) -> FormId {
        match self {
            Self::Actor(id) | Self::Faction(id) => id,
        }
    }

    #[inline]
    pub const fn as_actor(self) -> Option<FormId> {
        match self {
            Self::Actor(id) => Some(id),
            Self::Faction(_) => None,
        }
    }

    #[inline]
    pub const fn as_faction(self) -> Option<FormId> {
        match self {
            Self::Faction(id) => Some(id),
            Self::Actor(_) => None,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor(id) => write!(f, "actor {}", id),
            Self::Faction(id) => write!(f, "faction {}", id),
        }
    }
}

/// Catalog entry for a non-player character base.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorBase {
    pub id: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// Catalog entry for a faction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionRecord {
    pub id: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// The acting player's identity and faction memberships at call time.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActingIdentity {
    /// Actor base form of the acting player.
    pub actor: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub factions: BTreeSet<FormId>,
}

impl ActingIdentity {
    pub fn new(actor: FormId) -> Self {
        Self {
            actor,
            factions: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_faction(mut self, faction: FormId) -> Self {
        self.factions.insert(faction);
        self
    }

    #[inline]
    pub fn is_in_faction(&self, faction: FormId) -> bool {
        self.factions.contains(&faction)
    }
}
