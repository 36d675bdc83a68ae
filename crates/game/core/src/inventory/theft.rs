//! Theft verdict.

use super::resolve_owner;
use crate::state::{ActingIdentity, BaseItem, Container, Owner};

/// Returns true if possessing `item` from `container` counts as theft for
/// `identity`.
///
/// Only the variant of the resolved owner is checked: an actor owner is
/// compared against the acting actor, a faction owner against the acting
/// faction memberships. Unowned items, currency and lockpicks are never stolen.
pub fn is_stolen(container: &Container, item: &BaseItem, identity: &ActingIdentity) -> bool {
    match resolve_owner(container, item) {
        None => false,
        Some(Owner::Actor(actor)) => actor != identity.actor,
        Some(Owner::Faction(faction)) => !identity.is_in_faction(faction),
    }
}
