//! Inventory override resolution.
//!
//! Queries read a container's stack instances and apply the resolution
//! policy; transitions mutate instances in place under exclusive access.
//!
//! # Module Structure
//!
//! - `classify`: storable allow-list
//! - `ownership`: owner resolution and owner assignment
//! - `theft`: stolen verdict for the acting identity
//! - `enchantment`: effective enchantment and keyword tally
//! - `valuation`: gold value with saturation
//! - `insertion`: validated stack insertion
//!
//! Every scan walks instances in the container's native enumeration order and
//! matches items by [`FormId`](crate::state::FormId). When several sibling
//! instances carry conflicting overrides, the first one wins.

pub mod classify;
pub mod enchantment;
pub mod error;
pub mod insertion;
pub mod ownership;
pub mod theft;
pub mod valuation;

pub use classify::is_storable;
pub use enchantment::{count_enchanted_with_keyword, record_enchantment, resolve_enchantment};
pub use error::InventoryError;
pub use insertion::{InsertOutcome, InsertStackAction};
pub use ownership::{SetOwnerAction, resolve_owner};
pub use theft::is_stolen;
pub use valuation::{saturate_gold, total_value};

use crate::env::GameEnv;
use crate::error::ErrorContext;
use crate::state::Container;

/// Defines how an inventory operation mutates a container.
///
/// The container is borrowed exclusively for the whole validate/apply/verify
/// sequence and released before [`execute`] returns.
pub trait InventoryTransition {
    type Error;
    type Output;

    /// Script-facing name of the operation, used in diagnostics.
    fn operation(&self) -> &'static str;

    /// Context naming this operation and the container it runs against.
    fn error_context(&self, container: &Container) -> ErrorContext {
        ErrorContext::new(self.operation()).with_container(container.handle)
    }

    /// Validates pre-conditions using the container **before** mutation.
    fn pre_validate(&self, _container: &Container, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the operation by mutating the container in place. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, container: &mut Container, env: &GameEnv<'_>)
    -> Result<Self::Output, Self::Error>;

    /// Validates post-conditions using the container **after** mutation.
    fn post_validate(&self, _container: &Container, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Runs a transition's full validate/apply/verify sequence.
pub fn execute<T>(
    transition: &T,
    container: &mut Container,
    env: &GameEnv<'_>,
) -> Result<T::Output, T::Error>
where
    T: InventoryTransition + ?Sized,
{
    transition.pre_validate(container, env)?;
    let output = transition.apply(container, env)?;
    transition.post_validate(container, env)?;
    Ok(output)
}
