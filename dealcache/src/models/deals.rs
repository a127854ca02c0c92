// standard library
use std::cmp::Ordering;
use std::collections::BTreeMap;

// internal crates
use cheapshark_api::models::Deal;

// external crates
use serde_json::Value;

/// Deals grouped by store name. Ordered so the persisted snapshot is byte-stable
/// across refreshes of unchanged data.
pub type DealsByStore = BTreeMap<String, Vec<Deal>>;

/// Returns the deal's price, preferring `price` over `salePrice`. Missing or
/// unparseable prices (including NaN and infinities) map to `+inf` so they sort last.
pub fn price_of(deal: &Deal) -> f64 {
    let raw = deal.price.as_ref().or(deal.sale_price.as_ref());
    raw.and_then(parse_price).unwrap_or(f64::INFINITY)
}

fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if price.is_finite() {
        Some(price)
    } else {
        None
    }
}

/// Sorts ascending by price. Equal prices are ordered by the deal's JSON encoding
/// so the result does not depend on the input order.
pub fn sort_by_price(deals: Vec<Deal>) -> Vec<Deal> {
    let mut keyed: Vec<(f64, String, Deal)> = deals
        .into_iter()
        .map(|deal| {
            let canonical = serde_json::to_string(&deal).unwrap_or_default();
            (price_of(&deal), canonical, deal)
        })
        .collect();
    keyed.sort_by(|a, b| match a.0.total_cmp(&b.0) {
        Ordering::Equal => a.1.cmp(&b.1),
        ordering => ordering,
    });
    keyed.into_iter().map(|(_, _, deal)| deal).collect()
}
