//! Runtime wrappers around the core oracle traits.
//!
//! These implementations expose `satchel-core` oracle traits and bundle them
//! into an [`OracleManager`] so script functions can build
//! [`satchel_core::GameEnv`] snapshots on demand. The catalog is immutable
//! once loaded; the acting identity can change between calls.
mod identity;
mod valuation;

use std::sync::Arc;

use satchel_core::{Env, GameEnv, SnapshotCatalogOracle};

pub use identity::IdentityOracleImpl;
pub use valuation::ValuationOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<SnapshotCatalogOracle>,
    pub(crate) identity: Arc<IdentityOracleImpl>,
    pub(crate) valuation: Arc<ValuationOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(catalog: Arc<SnapshotCatalogOracle>, identity: Arc<IdentityOracleImpl>) -> Self {
        let valuation = Arc::new(ValuationOracleImpl::new(Arc::clone(&catalog)));
        Self {
            catalog,
            identity,
            valuation,
        }
    }

    /// Converts oracle manager into GameEnv for satchel-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.catalog.as_ref(),
            self.identity.as_ref(),
            self.valuation.as_ref(),
        )
        .as_game_env()
    }

    pub fn catalog(&self) -> &SnapshotCatalogOracle {
        &self.catalog
    }

    /// Get access to the identity oracle so callers can update the acting player
    pub fn identity(&self) -> &IdentityOracleImpl {
        &self.identity
    }
}
