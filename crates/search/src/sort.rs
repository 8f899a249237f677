//! Result ordering.
//!
//! All sorts are stable: products that compare equal keep their incoming
//! order, in both directions.

use crate::criteria::{SortDirection, SortKey};
use grocer_catalog::{Product, Store};
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;

/// Price used for ordering when the product has no offer at the pricing store.
pub const MISSING_PRICE: f64 = 0.0;

fn collation_key(name: &str) -> Vec<String> {
    name.unicode_words().map(str::to_lowercase).collect()
}

/// Natural, case-insensitive name order.
///
/// Names are compared word by word, ignoring case and punctuation. Names that
/// are still equal fall back to the full lower-cased text, and finally put the
/// lower-case spelling first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Price of `product` at `store` for ordering purposes.
#[inline]
pub fn sort_price(product: &Product, store: Store) -> f64 {
    product.price_at(store).unwrap_or(MISSING_PRICE)
}

/// Ascending comparison of two products on a single key.
pub fn compare(a: &Product, b: &Product, key: SortKey, pricing_store: Store) -> Ordering {
    match key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Price => sort_price(a, pricing_store).total_cmp(&sort_price(b, pricing_store)),
        SortKey::Popularity => a.stores_in_stock().cmp(&b.stores_in_stock()),
    }
}

/// Comparator for `key` in `direction`.
///
/// Descending reverses the ascending comparison, so ties stay ties.
pub fn comparator(
    key: SortKey,
    direction: SortDirection,
    pricing_store: Store,
) -> impl Fn(&Product, &Product) -> Ordering {
    move |a: &Product, b: &Product| direction.apply(compare(a, b, key, pricing_store))
}

/// Stable sort with an arbitrary product comparator.
pub fn sort_products_by<'a, F>(mut products: Vec<&'a Product>, compare: F) -> Vec<&'a Product>
where
    F: Fn(&Product, &Product) -> Ordering,
{
    products.sort_by(|a, b| compare(*a, *b));
    products
}

/// Stable sort by `key` in `direction`, pricing at `pricing_store`.
pub fn sort_products<'a>(
    products: Vec<&'a Product>,
    key: SortKey,
    direction: SortDirection,
    pricing_store: Store,
) -> Vec<&'a Product> {
    sort_products_by(products, comparator(key, direction, pricing_store))
}
