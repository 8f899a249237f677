//! The user profile and favorites.

use grocer_catalog::{Catalog, Product, ProductId, Store};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub favorites: Vec<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_store: Option<Store>,
}

impl UserProfile {
    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.iter().any(|id| id.as_str() == product_id)
    }

    /// Returns false when the product was already a favorite.
    pub fn add_favorite(&mut self, product_id: &str) -> bool {
        if self.is_favorite(product_id) {
            return false;
        }
        self.favorites.push(ProductId::from(product_id));
        true
    }

    /// Returns false when the product was not a favorite.
    pub fn remove_favorite(&mut self, product_id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|id| id.as_str() != product_id);
        self.favorites.len() != before
    }

    /// Favorite products in catalog order. Unknown ids are skipped.
    pub fn favorite_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.is_favorite(p.id.as_str()))
            .collect()
    }
}
