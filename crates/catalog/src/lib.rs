//! Product catalog for the grocer tools.
//!
//! This crate provides:
//! - The product data model (stores, units, categories, per-store offers)
//! - The catalog store that owns product records
//! - The seed catalog of everyday products
//!
//! # Example
//!
//! ```
//! use grocer_catalog::{Catalog, Store};
//!
//! let catalog = Catalog::seeded();
//! let bananas = catalog.get("p1").unwrap();
//! assert_eq!(bananas.price_at(Store::Aldi), Some(3.40));
//! ```

mod error;
mod model;
mod seed;
mod store;

pub use error::{CatalogError, CatalogErrorCode, Result};
pub use model::{Category, Product, ProductId, Store, StoreOffer, Unit};
pub use seed::seed_products;
pub use store::{Catalog, NewProduct, ProductUpdate};
