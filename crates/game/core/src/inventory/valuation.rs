//! Gold valuation.

use crate::env::ValuationOracle;
use crate::state::{BaseItem, FormId};

/// Gold value of `item` as seen by `actor`.
///
/// Plain items return their flat base value. Magic items go through the host's
/// effect-weighted formula; the floating result is floored and saturated into
/// the `i32` range.
pub fn total_value<V>(item: &BaseItem, actor: FormId, valuation: &V) -> i32
where
    V: ValuationOracle + ?Sized,
{
    if !item.is_magic_item() {
        return item.value;
    }
    saturate_gold(valuation.weighted_value(item, actor))
}

/// Floors `value` and clamps it to the representable `i32` range.
///
/// NaN maps to zero.
pub fn saturate_gold(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let floored = value.floor();
    if floored >= f64::from(i32::MAX) {
        i32::MAX
    } else if floored <= f64::from(i32::MIN) {
        i32::MIN
    } else {
        floored as i32
    }
}
