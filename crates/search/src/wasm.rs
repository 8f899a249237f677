//! WASM bindings for catalog search.

use crate::{RawCriteria, SearchCriteria};
use grocer_catalog::{Category, Product, Store};
use wasm_bindgen::prelude::*;

fn parse_catalog(catalog_json: &str) -> Result<Vec<Product>, JsValue> {
    serde_json::from_str(catalog_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))
}

fn ids_json(products: &[&Product]) -> Result<String, JsValue> {
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    serde_json::to_string(&ids).map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Check whether `text` matches `query` with typo tolerance.
#[wasm_bindgen]
pub fn fuzzy_matches(text: &str, query: &str) -> bool {
    crate::fuzzy::matches(text, query)
}

/// Search a catalog and return the matching product ids in result order.
///
/// # Arguments
/// * `catalog_json` - JSON array of products
/// * `criteria_json` - JSON object with `query`, `category`, `store`, `sort`
///   and `direction` fields, all optional
/// * `pricing_store` - Store name prices are read from; empty for the default
///
/// # Returns
/// JSON array of product ids
#[wasm_bindgen]
pub fn search_catalog(
    catalog_json: &str,
    criteria_json: &str,
    pricing_store: &str,
) -> Result<String, JsValue> {
    let catalog = parse_catalog(catalog_json)?;
    let raw: RawCriteria = serde_json::from_str(criteria_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    let criteria =
        SearchCriteria::try_from(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let fallback = if pricing_store.trim().is_empty() {
        crate::DEFAULT_PRICING_STORE
    } else {
        pricing_store
            .parse::<Store>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let store = crate::resolve_pricing_store(criteria.store, None, fallback);

    ids_json(&crate::search(&catalog, &criteria, store))
}

/// Suggestions for a partially typed item name, as a JSON array of ids.
///
/// `category` may be empty or `"all"` for every category.
#[wasm_bindgen]
pub fn suggest_products(catalog_json: &str, query: &str, category: &str) -> Result<String, JsValue> {
    let catalog = parse_catalog(catalog_json)?;
    let category = match category.trim() {
        "" => None,
        c if c.eq_ignore_ascii_case("all") => None,
        c => Some(
            c.parse::<Category>()
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
        ),
    };

    ids_json(&crate::suggest(&catalog, query, category))
}
