//! The catalog store: the one owner of product records.
//!
//! Everything else reads products through [`Catalog::products`], an immutable
//! snapshot slice. Products are appended or updated, never deleted.

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, ProductId, Store, StoreOffer, Unit};
use crate::seed::seed_products;
use grocer_core::validation::{validate_name, validate_price};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered, in-memory product catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Partial update of a product. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub brands: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    /// Replaces the whole store map.
    pub stores: Option<BTreeMap<Store, StoreOffer>>,
}

/// A product the user types in when the catalog has no match.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub brand: Option<String>,
    pub unit: Unit,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog populated with the seed products.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Read-only snapshot of every product, in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look a product up or fail with [`CatalogError::ProductNotFound`].
    pub fn require(&self, id: &str) -> Result<&Product> {
        self.get(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Append a product. Ids must be unique.
    pub fn add(&mut self, product: Product) -> Result<&Product> {
        if self.get(product.id.as_str()).is_some() {
            return Err(CatalogError::DuplicateProduct(product.id.to_string()));
        }
        tracing::debug!(id = %product.id, name = %product.name, "Product added");
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Add a user-entered product.
    ///
    /// The product is offered at every store at price 0 in the given unit and
    /// is in stock; its only tag is the lower-cased category name.
    pub fn add_custom(&mut self, new: NewProduct) -> Result<&Product> {
        let name = new.name.trim();
        let report = validate_name("name", name);
        if !report.is_valid() {
            let messages: Vec<String> = report.errors().iter().map(|e| e.to_string()).collect();
            return Err(CatalogError::InvalidProduct(messages.join("; ")));
        }

        let brands = new
            .brand
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        let product = Store::ALL.into_iter().fold(
            Product::new(ProductId::generate(), name, new.category)
                .with_brands(brands)
                .with_tags([new.category.as_str().to_lowercase()]),
            |product, store| product.with_offer(store, 0.0, new.unit, true),
        );

        self.add(product)
    }

    /// Apply a partial update to the product with `id`.
    ///
    /// Nothing is changed unless the whole update is valid.
    pub fn update(&mut self, id: &str, update: ProductUpdate) -> Result<&Product> {
        let name = update.name.as_deref().map(str::trim);
        if let Some(name) = name {
            let report = validate_name("name", name);
            if !report.is_valid() {
                return Err(CatalogError::InvalidProduct(format!("name: {:?}", name)));
            }
        }
        for offer in update.stores.iter().flat_map(|stores| stores.values()) {
            check_price(offer.price)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;

        if let Some(name) = name {
            product.name = name.to_string();
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(brands) = update.brands {
            product.brands = brands;
        }
        if let Some(tags) = update.tags {
            product.tags = tags;
        }
        if let Some(stores) = update.stores {
            product.stores = stores;
        }

        tracing::debug!(id = %product.id, "Product updated");
        Ok(&*product)
    }

    /// Set or replace a single store's offer.
    pub fn set_offer(&mut self, id: &str, store: Store, offer: StoreOffer) -> Result<&Product> {
        check_price(offer.price)?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;
        product.stores.insert(store, offer);
        Ok(&*product)
    }
}

fn check_price(price: f64) -> Result<()> {
    match validate_price(price).errors().first() {
        Some(error) => Err(CatalogError::InvalidProduct(error.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 30);
        assert_eq!(catalog.get("p1").unwrap().name, "Bananas");
        assert!(catalog.get("p99").is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = Catalog::seeded();
        let err = catalog
            .add(Product::new("p1", "Plantains", Category::FreshProduce))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(id) if id == "p1"));
        assert_eq!(catalog.len(), 30);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = Catalog::default();
        catalog.add(Product::new("a", "First", Category::Pantry)).unwrap();
        catalog.add(Product::new("b", "Second", Category::Pantry)).unwrap();
        let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_add_custom_product() {
        let mut catalog = Catalog::default();
        let product = catalog
            .add_custom(NewProduct {
                name: "  Oat Milk ".to_string(),
                category: Category::DairyAndEggs,
                brand: Some("Oatly".to_string()),
                unit: Unit::Litre,
            })
            .unwrap()
            .clone();

        assert_eq!(product.name, "Oat Milk");
        assert_eq!(product.brands, ["Oatly"]);
        assert_eq!(product.tags, ["dairy & eggs"]);
        assert_eq!(product.stores.len(), 4);
        assert_eq!(product.price_at(Store::Aldi), Some(0.0));
        assert!(product.in_stock_at(Store::Iga));
        assert_eq!(product.default_unit(), Some(Unit::Litre));
    }

    #[test]
    fn test_add_custom_rejects_blank_name() {
        let mut catalog = Catalog::default();
        let err = catalog
            .add_custom(NewProduct {
                name: "   ".to_string(),
                category: Category::Pantry,
                brand: None,
                unit: Unit::Each,
            })
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProduct(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_update_partial() {
        let mut catalog = Catalog::seeded();
        catalog
            .update(
                "p4",
                ProductUpdate {
                    name: Some("Carrots - Organic".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let carrots = catalog.get("p4").unwrap();
        assert_eq!(carrots.name, "Carrots - Organic");
        assert_eq!(carrots.category, Category::FreshProduce);
        assert_eq!(carrots.stores.len(), 4);
    }

    #[test]
    fn test_update_trims_name() {
        let mut catalog = Catalog::seeded();
        let product = catalog
            .update(
                "p1",
                ProductUpdate {
                    name: Some("  Lady Finger Bananas  ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(product.name, "Lady Finger Bananas");
    }

    #[test]
    fn test_update_rejects_invalid_offer() {
        let mut catalog = Catalog::seeded();
        for price in [f64::NAN, -2.0] {
            let stores = BTreeMap::from([(Store::Coles, StoreOffer::new(price, Unit::Kilogram, true))]);
            let err = catalog
                .update(
                    "p1",
                    ProductUpdate {
                        name: Some("Renamed".to_string()),
                        stores: Some(stores),
                        ..Default::default()
                    },
                )
                .unwrap_err();
            assert!(matches!(err, CatalogError::InvalidProduct(_)));
        }

        let bananas = catalog.get("p1").unwrap();
        assert_eq!(bananas.name, "Bananas");
        assert_eq!(bananas.price_at(Store::Coles), Some(3.90));
    }

    #[test]
    fn test_update_unknown_product() {
        let mut catalog = Catalog::seeded();
        let err = catalog.update("nope", ProductUpdate::default()).unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(_)));
    }

    #[test]
    fn test_set_offer_marks_out_of_stock() {
        let mut catalog = Catalog::seeded();
        catalog
            .set_offer("p1", Store::Coles, StoreOffer::new(3.90, Unit::Kilogram, false))
            .unwrap();
        assert!(!catalog.get("p1").unwrap().in_stock_at(Store::Coles));
    }

    #[test]
    fn test_set_offer_rejects_negative_price() {
        let mut catalog = Catalog::seeded();
        let err = catalog
            .set_offer("p1", Store::Coles, StoreOffer::new(-1.0, Unit::Kilogram, true))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProduct(_)));
        assert_eq!(catalog.get("p1").unwrap().price_at(Store::Coles), Some(3.90));
    }
}
