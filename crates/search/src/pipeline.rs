//! The search pipeline: filter, then sort.

use crate::criteria::{RawCriteria, SearchCriteria};
use crate::error::Result;
use crate::filter::filter_catalog;
use crate::relevance::NameBoost;
use crate::sort::sort_products;
use grocer_catalog::{Category, Product, Store};

/// Store prices are read from when nothing else is selected or preferred.
pub const DEFAULT_PRICING_STORE: Store = Store::Woolworths;

/// Pick the store used for price ordering and display.
///
/// The store the user filtered on wins, then their preferred store, then
/// `fallback`.
#[inline]
pub fn resolve_pricing_store(
    selected: Option<Store>,
    preferred: Option<Store>,
    fallback: Store,
) -> Store {
    selected.or(preferred).unwrap_or(fallback)
}

/// Run a search over `catalog`.
///
/// Returns references into the catalog: the products passing every filter in
/// `criteria`, stably ordered by its sort key and direction with prices read
/// at `pricing_store`. The catalog itself is not touched.
pub fn search<'a>(
    catalog: &'a [Product],
    criteria: &SearchCriteria,
    pricing_store: Store,
) -> Vec<&'a Product> {
    let filtered = filter_catalog(catalog, criteria);
    tracing::debug!(
        query = %criteria.query,
        category = ?criteria.category,
        store = ?criteria.store,
        matched = filtered.len(),
        total = catalog.len(),
        "Catalog filtered"
    );
    sort_products(filtered, criteria.sort_key, criteria.direction, pricing_store)
}

/// Resolve loose criteria and search.
///
/// Fails before touching the catalog when the sort key, direction, category
/// or store is unknown.
pub fn search_raw<'a>(
    catalog: &'a [Product],
    raw: &RawCriteria,
    pricing_store: Store,
) -> Result<Vec<&'a Product>> {
    let criteria = SearchCriteria::try_from(raw)?;
    Ok(search(catalog, &criteria, pricing_store))
}

/// Suggestions while adding an item to a list.
///
/// A blank query suggests nothing. Otherwise the same text and category
/// filters as [`search`] apply, without the store filter. Products whose name
/// contains the query come first; catalog order is kept within each group.
pub fn suggest<'a>(
    catalog: &'a [Product],
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let criteria = SearchCriteria {
        query: query.to_string(),
        category,
        ..Default::default()
    };
    let boost = NameBoost::new(query);
    let mut matches = filter_catalog(catalog, &criteria);
    matches.sort_by(|a, b| boost.compare(a, b));
    matches
}

/// Run several independent searches over the same catalog.
///
/// Results are returned in the order of `criteria`.
#[cfg(feature = "parallel")]
pub fn search_many<'a>(
    catalog: &'a [Product],
    criteria: &[SearchCriteria],
    pricing_store: Store,
) -> Vec<Vec<&'a Product>> {
    use rayon::prelude::*;

    criteria
        .par_iter()
        .map(|c| search(catalog, c, pricing_store))
        .collect()
}

/// Run several independent searches over the same catalog.
///
/// Results are returned in the order of `criteria`.
#[cfg(not(feature = "parallel"))]
pub fn search_many<'a>(
    catalog: &'a [Product],
    criteria: &[SearchCriteria],
    pricing_store: Store,
) -> Vec<Vec<&'a Product>> {
    criteria
        .iter()
        .map(|c| search(catalog, c, pricing_store))
        .collect()
}
