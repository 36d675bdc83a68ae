//! [`satchel_core::ValuationOracle`] backed by the shared catalog.
use std::sync::Arc;

use satchel_core::{BaseItem, EffectWeightedValuation, FormId, SnapshotCatalogOracle, ValuationOracle};

/// Effect-weighted valuation over the runtime's catalog
pub struct ValuationOracleImpl {
    catalog: Arc<SnapshotCatalogOracle>,
}

impl ValuationOracleImpl {
    pub fn new(catalog: Arc<SnapshotCatalogOracle>) -> Self {
        Self { catalog }
    }
}

impl ValuationOracle for ValuationOracleImpl {
    fn weighted_value(&self, item: &BaseItem, actor: FormId) -> f64 {
        EffectWeightedValuation::new(self.catalog.as_ref()).weighted_value(item, actor)
    }
}
