//! Effect-weighted valuation of magic items.

use super::CatalogOracle;
use crate::state::{BaseItem, FormId};

/// Host valuation formula for magic items.
///
/// The core treats the result as a black box: it floors and saturates the
/// returned value but never inspects how it was computed.
pub trait ValuationOracle: Send + Sync {
    /// Floating gold value of `item` as seen by `actor`.
    fn weighted_value(&self, item: &BaseItem, actor: FormId) -> f64;
}

/// Reference formula backed by catalog effect costs.
///
/// Each effect contributes
/// `base_cost * max(magnitude, 1)^1.1 * max(duration / 10, 1)^1.1`;
/// effects whose base definition is unknown contribute nothing. The acting
/// actor does not influence the result.
pub struct EffectWeightedValuation<'a, C>
where
    C: CatalogOracle + ?Sized,
{
    catalog: &'a C,
}

impl<'a, C> EffectWeightedValuation<'a, C>
where
    C: CatalogOracle + ?Sized,
{
    const EXPONENT: f64 = 1.1;

    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }
}

impl<C> ValuationOracle for EffectWeightedValuation<'_, C>
where
    C: CatalogOracle + ?Sized,
{
    fn weighted_value(&self, item: &BaseItem, _actor: FormId) -> f64 {
        item.effects
            .iter()
            .filter_map(|effect| {
                let base = self.catalog.magic_effect(effect.base_effect)?;
                let magnitude = f64::from(effect.magnitude).max(1.0);
                let duration = (f64::from(effect.duration) / 10.0).max(1.0);
                Some(
                    f64::from(base.base_cost)
                        * magnitude.powf(Self::EXPONENT)
                        * duration.powf(Self::EXPONENT),
                )
            })
            .sum()
    }
}
