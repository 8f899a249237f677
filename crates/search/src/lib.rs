//! Fuzzy search, filtering and sorting over the grocery catalog.
//!
//! This crate provides:
//! - Typo-tolerant name matching
//! - Text, category and store-availability filters
//! - Stable name, price and popularity ordering
//! - The combined search pipeline and list-item suggestions
//!
//! # Example
//!
//! ```
//! use grocer_catalog::{Catalog, Category, Store};
//! use grocer_search::{search, SearchCriteria, SortDirection, SortKey};
//!
//! let catalog = Catalog::seeded();
//! let criteria = SearchCriteria::new()
//!     .in_category(Category::DairyAndEggs)
//!     .at_store(Store::Aldi)
//!     .sorted_by(SortKey::Price, SortDirection::Asc);
//!
//! let results = search(catalog.products(), &criteria, Store::Aldi);
//! assert!(results.iter().all(|p| p.in_stock_at(Store::Aldi)));
//! ```

mod criteria;
mod error;
mod filter;
mod fuzzy;
mod pipeline;
mod relevance;
mod sort;

#[cfg(feature = "wasm")]
mod wasm;

pub use criteria::{RawCriteria, SearchCriteria, SortDirection, SortKey};
pub use error::{Result, SearchError, SearchErrorCode};
pub use filter::{filter_catalog, matches_category, matches_store, matches_text};
pub use fuzzy::{matches as fuzzy_matches, tolerance};
pub use pipeline::{
    resolve_pricing_store, search, search_many, search_raw, suggest, DEFAULT_PRICING_STORE,
};
pub use relevance::NameBoost;
pub use sort::{
    compare, compare_names, comparator, sort_price, sort_products, sort_products_by,
    MISSING_PRICE,
};
