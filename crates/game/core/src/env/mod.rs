//! Traits describing read-only host collaborators.
//!
//! Oracles expose the item catalog, the acting player's identity, and the
//! host valuation formula. The [`Env`] aggregate bundles them so the
//! resolution rules can reach everything they need without ambient singletons.
mod catalog;
mod error;
mod identity;
mod snapshot;
mod valuation;

pub use catalog::{CatalogOracle, FormKind};
pub use error::OracleError;
pub use identity::IdentityOracle;
pub use snapshot::{CatalogSnapshot, SnapshotCatalogOracle};
pub use valuation::{EffectWeightedValuation, ValuationOracle};

/// Aggregates read-only oracles required by the inventory operations.
pub struct Env<'a, C, I, V>
where
    C: CatalogOracle + ?Sized,
    I: IdentityOracle + ?Sized,
    V: ValuationOracle + ?Sized,
{
    catalog: Option<&'a C>,
    identity: Option<&'a I>,
    valuation: Option<&'a V>,
}

impl<C, I, V> Clone for Env<'_, C, I, V>
where
    C: CatalogOracle + ?Sized,
    I: IdentityOracle + ?Sized,
    V: ValuationOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, I, V> Copy for Env<'_, C, I, V>
where
    C: CatalogOracle + ?Sized,
    I: IdentityOracle + ?Sized,
    V: ValuationOracle + ?Sized,
{
}

pub type GameEnv<'a> =
    Env<'a, dyn CatalogOracle + 'a, dyn IdentityOracle + 'a, dyn ValuationOracle + 'a>;

impl<'a, C, I, V> Env<'a, C, I, V>
where
    C: CatalogOracle + ?Sized,
    I: IdentityOracle + ?Sized,
    V: ValuationOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a C>, identity: Option<&'a I>, valuation: Option<&'a V>) -> Self {
        Self {
            catalog,
            identity,
            valuation,
        }
    }

    pub fn with_all(catalog: &'a C, identity: &'a I, valuation: &'a V) -> Self {
        Self::new(Some(catalog), Some(identity), Some(valuation))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            identity: None,
            valuation: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the IdentityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::IdentityNotAvailable` if no identity source was provided.
    pub fn identity(&self) -> Result<&'a I, OracleError> {
        self.identity.ok_or(OracleError::IdentityNotAvailable)
    }

    /// Returns the ValuationOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ValuationNotAvailable` if no valuation formula was provided.
    pub fn valuation(&self) -> Result<&'a V, OracleError> {
        self.valuation.ok_or(OracleError::ValuationNotAvailable)
    }
}

impl<'a, C, I, V> Env<'a, C, I, V>
where
    C: CatalogOracle + 'a,
    I: IdentityOracle + 'a,
    V: ValuationOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let identity: Option<&'a dyn IdentityOracle> = self.identity.map(|identity| identity as _);
        let valuation: Option<&'a dyn ValuationOracle> =
            self.valuation.map(|valuation| valuation as _);
        Env::new(catalog, identity, valuation)
    }
}
