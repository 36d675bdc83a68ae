//! Identity source for the acting player.

use crate::state::ActingIdentity;

/// Supplies the acting identity and its faction memberships at call time.
pub trait IdentityOracle: Send + Sync {
    fn acting_identity(&self) -> ActingIdentity;
}

impl IdentityOracle for ActingIdentity {
    fn acting_identity(&self) -> ActingIdentity {
        self.clone()
    }
}
