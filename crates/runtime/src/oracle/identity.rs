//! Mutable [`satchel_core::IdentityOracle`] for the acting player.
use std::sync::{PoisonError, RwLock};

use satchel_core::{ActingIdentity, FormId, IdentityOracle};

/// IdentityOracle implementation holding the current acting identity
#[derive(Debug, Default)]
pub struct IdentityOracleImpl {
    identity: RwLock<ActingIdentity>,
}

impl IdentityOracleImpl {
    pub fn new(identity: ActingIdentity) -> Self {
        Self {
            identity: RwLock::new(identity),
        }
    }

    /// Replace the acting identity
    pub fn set(&self, identity: ActingIdentity) {
        *self.identity.write().unwrap_or_else(PoisonError::into_inner) = identity;
    }

    /// Add a faction membership to the acting identity
    pub fn join_faction(&self, faction: FormId) {
        self.identity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .factions
            .insert(faction);
    }
}

impl IdentityOracle for IdentityOracleImpl {
    fn acting_identity(&self) -> ActingIdentity {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
