//! Script-facing functions.
//!
//! Every entry point validates its arguments first. Any failure, from an
//! absent argument to an unresolvable form, is reported through the
//! [`Diagnostics`] channel and converted into the function's neutral return
//! value (false, none or zero). Nothing here panics or propagates into
//! script state.

mod bindings;

use std::sync::Arc;

use satchel_core::{
    BaseItem, CatalogOracle, ErrorContext, FormId, FormKind, IdentityOracle, InsertStackAction,
    InventoryError, Owner, SetOwnerAction, count_enchanted_with_keyword, execute, is_stolen,
    is_storable, resolve_enchantment, resolve_owner, total_value,
};

pub use bindings::register_functions;

use crate::api::{Diagnostic, Diagnostics, Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::plugin::Version;
use crate::repository::{ContainerStore, ContainerStoreExt};

/// Owner variant a typed setter expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OwnerKind {
    Actor,
    Faction,
}

/// Script functions evaluated against live containers.
#[derive(Clone)]
pub struct ScriptFunctions {
    oracles: OracleManager,
    containers: Arc<dyn ContainerStore>,
    diagnostics: Arc<dyn Diagnostics>,
    version: Version,
}

impl ScriptFunctions {
    pub fn new(
        oracles: OracleManager,
        containers: Arc<dyn ContainerStore>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            oracles,
            containers,
            diagnostics,
            version: Version::current(),
        }
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn containers(&self) -> &dyn ContainerStore {
        self.containers.as_ref()
    }

    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }

    // ------------------------------------------------------------------
    // Ownership
    // ------------------------------------------------------------------

    /// Actor owning `item` in `container`, if the resolved owner is an actor.
    pub fn get_form_actor_owner(
        &self,
        container: Option<FormId>,
        item: Option<FormId>,
    ) -> Option<FormId> {
        const FUNCTION: &str = "GetFormActorOwner";
        let owner = self.neutral(FUNCTION, self.form_owner(FUNCTION, container, item));
        owner.and_then(Owner::as_actor)
    }

    /// Faction owning `item` in `container`, if the resolved owner is a faction.
    pub fn get_form_faction_owner(
        &self,
        container: Option<FormId>,
        item: Option<FormId>,
    ) -> Option<FormId> {
        const FUNCTION: &str = "GetFormFactionOwner";
        let owner = self.neutral(FUNCTION, self.form_owner(FUNCTION, container, item));
        owner.and_then(Owner::as_faction)
    }

    pub fn is_form_stolen(&self, container: Option<FormId>, item: Option<FormId>) -> bool {
        const FUNCTION: &str = "IsFormStolen";
        let result = self.with_item(FUNCTION, container, item, |container, item| {
            let identity = self.oracles.as_game_env().identity()?.acting_identity();
            self.containers
                .with_container(container, |container| is_stolen(container, item, &identity))
                .map_err(RuntimeError::from)
        });
        self.neutral(FUNCTION, result)
    }

    pub fn set_form_actor_owner(
        &self,
        container: Option<FormId>,
        item: Option<FormId>,
        owner: Option<FormId>,
    ) -> bool {
        self.set_form_owner("SetFormActorOwner", container, item, owner, OwnerKind::Actor)
    }

    pub fn set_form_faction_owner(
        &self,
        container: Option<FormId>,
        item: Option<FormId>,
        owner: Option<FormId>,
    ) -> bool {
        self.set_form_owner("SetFormFactionOwner", container, item, owner, OwnerKind::Faction)
    }

    // ------------------------------------------------------------------
    // Enchantment
    // ------------------------------------------------------------------

    pub fn get_form_enchantment(
        &self,
        container: Option<FormId>,
        item: Option<FormId>,
    ) -> Option<FormId> {
        const FUNCTION: &str = "GetFormEnchantment";
        let result = self.with_item(FUNCTION, container, item, |container, item| {
            self.containers
                .with_container(container, |container| resolve_enchantment(container, item))
                .map_err(RuntimeError::from)
        });
        self.neutral(FUNCTION, result)
    }

    pub fn get_num_enchanted_forms_with_keyword(
        &self,
        container: Option<FormId>,
        keyword: Option<FormId>,
    ) -> i32 {
        const FUNCTION: &str = "GetNumEnchantedFormsWithKeyword";
        self.neutral(FUNCTION, self.try_count_keyword(FUNCTION, container, keyword))
    }

    // ------------------------------------------------------------------
    // Valuation and storage
    // ------------------------------------------------------------------

    pub fn get_total_gold_value(&self, item: Option<FormId>) -> i32 {
        const FUNCTION: &str = "GetTotalGoldValue";
        self.neutral(FUNCTION, self.try_total_value(FUNCTION, item))
    }

    pub fn is_form_storable(&self, item: Option<FormId>) -> bool {
        const FUNCTION: &str = "IsFormStorable";
        let result = self.base_item(FUNCTION, item).map(is_storable);
        self.neutral(FUNCTION, result)
    }

    /// Inserts `count` units of `item` into `container`, optionally owned.
    ///
    /// An owner that is neither an actor nor a faction is reported and dropped;
    /// the insertion still goes ahead unowned.
    pub fn add_form_with_owner(
        &self,
        container: Option<FormId>,
        item: Option<FormId>,
        count: i32,
        owner: Option<FormId>,
    ) -> bool {
        const FUNCTION: &str = "AddFormWithOwner";
        self.neutral(FUNCTION, self.try_insert(FUNCTION, container, item, count, owner))
    }

    pub fn get_version(&self) -> Vec<i32> {
        self.version.as_array().to_vec()
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn set_form_owner(
        &self,
        function: &'static str,
        container: Option<FormId>,
        item: Option<FormId>,
        owner: Option<FormId>,
        kind: OwnerKind,
    ) -> bool {
        let result = self.try_set_owner(function, container, item, owner, kind);
        self.neutral(function, result)
    }

    fn try_set_owner(
        &self,
        function: &'static str,
        container: Option<FormId>,
        item: Option<FormId>,
        owner: Option<FormId>,
        kind: OwnerKind,
    ) -> Result<bool> {
        let (Some(container), Some(item), Some(owner)) = (container, item, owner) else {
            return Err(InventoryError::missing_argument(function).into());
        };
        let owner = match (kind, self.oracles.catalog().owner(owner)) {
            (OwnerKind::Actor, Some(owner @ Owner::Actor(_)))
            | (OwnerKind::Faction, Some(owner @ Owner::Faction(_))) => owner,
            _ => {
                let context = ErrorContext::new(function)
                    .with_container(container)
                    .with_item(item);
                return Err(InventoryError::invalid_owner(owner, context).into());
            }
        };

        let action = SetOwnerAction::new(item, owner);
        let env = self.oracles.as_game_env();
        let touched = self
            .containers
            .with_container_mut(container, |container| execute(&action, container, &env))??;
        tracing::debug!(container = %container, item = %item, %owner, touched, "set owner");
        Ok(touched > 0)
    }

    fn try_count_keyword(
        &self,
        function: &'static str,
        container: Option<FormId>,
        keyword: Option<FormId>,
    ) -> Result<i32> {
        let (Some(container), Some(keyword)) = (container, keyword) else {
            return Err(InventoryError::missing_argument(function).into());
        };
        let catalog = self.oracles.catalog();
        if catalog.form_kind(keyword) != Some(FormKind::Keyword) {
            return Err(RuntimeError::UnresolvedForm(keyword));
        }
        let tally = self.containers.with_container(container, |container| {
            count_enchanted_with_keyword(container, keyword, catalog)
        })?;
        Ok(i32::try_from(tally).unwrap_or(i32::MAX))
    }

    fn try_total_value(&self, function: &'static str, item: Option<FormId>) -> Result<i32> {
        let item = self.base_item(function, item)?;
        let env = self.oracles.as_game_env();
        let actor = env.identity()?.acting_identity().actor;
        Ok(total_value(item, actor, env.valuation()?))
    }

    fn try_insert(
        &self,
        function: &'static str,
        container: Option<FormId>,
        item: Option<FormId>,
        count: i32,
        owner: Option<FormId>,
    ) -> Result<bool> {
        let (Some(container), Some(item)) = (container, item) else {
            return Err(InventoryError::missing_argument(function).into());
        };
        let action = InsertStackAction { item, count, owner };
        let env = self.oracles.as_game_env();
        let outcome = self
            .containers
            .with_container_mut(container, |container| execute(&action, container, &env))??;

        if let Some(dropped) = outcome.dropped_owner {
            let context = ErrorContext::new(function)
                .with_container(container)
                .with_item(item)
                .with_message("stack stored unowned");
            self.diagnostics.report(Diagnostic::from_error(
                function,
                &InventoryError::invalid_owner(dropped, context),
            ));
        }
        tracing::debug!(
            container = %container,
            item = %item,
            count,
            stored = outcome.stored,
            "inserted stack"
        );
        Ok(outcome.stored)
    }

    fn form_owner(
        &self,
        function: &'static str,
        container: Option<FormId>,
        item: Option<FormId>,
    ) -> Result<Option<Owner>> {
        self.with_item(function, container, item, |container, item| {
            self.containers
                .with_container(container, |container| resolve_owner(container, item))
                .map_err(RuntimeError::from)
        })
    }

    /// Validates a (container, item) pair and resolves the item in the catalog.
    fn with_item<R>(
        &self,
        function: &'static str,
        container: Option<FormId>,
        item: Option<FormId>,
        f: impl FnOnce(FormId, &BaseItem) -> Result<R>,
    ) -> Result<R> {
        let (Some(container), Some(_)) = (container, item) else {
            return Err(InventoryError::missing_argument(function).into());
        };
        let item = self.base_item(function, item)?;
        f(container, item)
    }

    fn base_item(&self, function: &'static str, item: Option<FormId>) -> Result<&BaseItem> {
        let item = item.ok_or(InventoryError::missing_argument(function))?;
        self.oracles
            .catalog()
            .item(item)
            .ok_or(RuntimeError::UnresolvedForm(item))
    }

    /// Reports `result`'s error, if any, and falls back to the neutral value.
    fn neutral<T: Default>(&self, function: &'static str, result: Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                self.diagnostics.report(Diagnostic::from_error(function, &err));
                T::default()
            }
        }
    }
}
