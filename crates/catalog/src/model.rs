//! Catalog data model: stores, units, categories, offers and products.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A supermarket chain that sells catalog products.
///
/// Declaration order is the canonical display order and the iteration order
/// of a product's offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Store {
    Woolworths,
    Coles,
    Aldi,
    #[serde(rename = "IGA")]
    Iga,
}

impl Store {
    /// Every store, in canonical order.
    pub const ALL: [Store; 4] = [Store::Woolworths, Store::Coles, Store::Aldi, Store::Iga];

    /// Display name of the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Store::Woolworths => "Woolworths",
            Store::Coles => "Coles",
            Store::Aldi => "Aldi",
            Store::Iga => "IGA",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Store {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Store::ALL
            .into_iter()
            .find(|store| store.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownStore(s.to_string()))
    }
}

/// Unit of measure a store prices a product in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "each")]
    Each,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "L")]
    Litre,
    #[serde(rename = "ml")]
    Millilitre,
    #[serde(rename = "pack")]
    Pack,
}

impl Unit {
    /// Short label, as printed after a price.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Each => "each",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Litre => "L",
            Unit::Millilitre => "ml",
            Unit::Pack => "pack",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "each" => Ok(Unit::Each),
            "kg" => Ok(Unit::Kilogram),
            "g" => Ok(Unit::Gram),
            "L" | "l" => Ok(Unit::Litre),
            "ml" => Ok(Unit::Millilitre),
            "pack" => Ok(Unit::Pack),
            _ => Err(CatalogError::UnknownUnit(s.to_string())),
        }
    }
}

/// Aisle category. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fresh Produce")]
    FreshProduce,
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[serde(rename = "Meat & Seafood")]
    MeatAndSeafood,
    #[serde(rename = "Bakery")]
    Bakery,
    #[serde(rename = "Pantry")]
    Pantry,
    #[serde(rename = "Snacks & Confectionery")]
    SnacksAndConfectionery,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Frozen Food")]
    FrozenFood,
    #[serde(rename = "Household")]
    Household,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Baby")]
    Baby,
    #[serde(rename = "Pet")]
    Pet,
}

impl Category {
    /// Every category, in aisle order.
    pub const ALL: [Category; 12] = [
        Category::FreshProduce,
        Category::DairyAndEggs,
        Category::MeatAndSeafood,
        Category::Bakery,
        Category::Pantry,
        Category::SnacksAndConfectionery,
        Category::Beverages,
        Category::FrozenFood,
        Category::Household,
        Category::PersonalCare,
        Category::Baby,
        Category::Pet,
    ];

    /// Display name. This is the string free-text search looks at.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FreshProduce => "Fresh Produce",
            Category::DairyAndEggs => "Dairy & Eggs",
            Category::MeatAndSeafood => "Meat & Seafood",
            Category::Bakery => "Bakery",
            Category::Pantry => "Pantry",
            Category::SnacksAndConfectionery => "Snacks & Confectionery",
            Category::Beverages => "Beverages",
            Category::FrozenFood => "Frozen Food",
            Category::Household => "Household",
            Category::PersonalCare => "Personal Care",
            Category::Baby => "Baby",
            Category::Pet => "Pet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id for a user-added product.
    pub fn generate() -> Self {
        Self(format!("p-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// What one store charges for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOffer {
    pub price: f64,
    pub unit: Unit,
    pub in_stock: bool,
}

impl StoreOffer {
    #[inline]
    pub fn new(price: f64, unit: Unit, in_stock: bool) -> Self {
        Self { price, unit, in_stock }
    }
}

/// A catalog product.
///
/// `stores` may cover only some stores; a missing entry means the product is
/// not sold there, which is different from a zero price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
    #[serde(default)]
    pub stores: BTreeMap<Store, StoreOffer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Creates a product with no brands, tags or offers.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            brands: Vec::new(),
            stores: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_offer(mut self, store: Store, price: f64, unit: Unit, in_stock: bool) -> Self {
        self.stores.insert(store, StoreOffer::new(price, unit, in_stock));
        self
    }

    /// The offer at `store`, if the product is sold there.
    #[inline]
    pub fn offer(&self, store: Store) -> Option<&StoreOffer> {
        self.stores.get(&store)
    }

    #[inline]
    pub fn price_at(&self, store: Store) -> Option<f64> {
        self.offer(store).map(|offer| offer.price)
    }

    /// True only when the store carries the product and has it in stock.
    #[inline]
    pub fn in_stock_at(&self, store: Store) -> bool {
        self.offer(store).is_some_and(|offer| offer.in_stock)
    }

    /// Number of stores with the product in stock.
    pub fn stores_in_stock(&self) -> usize {
        self.stores.values().filter(|offer| offer.in_stock).count()
    }

    /// Lowest price across all stores, for "from $x" displays.
    pub fn cheapest_price(&self) -> Option<f64> {
        self.stores
            .values()
            .map(|offer| offer.price)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Unit of the first store offer; what a new list item defaults to.
    pub fn default_unit(&self) -> Option<Unit> {
        self.stores.values().next().map(|offer| offer.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Product {
        Product::new("p6", "Milk - Full Cream", Category::DairyAndEggs)
            .with_offer(Store::Coles, 2.30, Unit::Litre, true)
            .with_offer(Store::Aldi, 2.19, Unit::Litre, false)
    }

    #[test]
    fn test_store_parsing() {
        assert_eq!("iga".parse::<Store>().unwrap(), Store::Iga);
        assert_eq!(" Woolworths ".parse::<Store>().unwrap(), Store::Woolworths);
        assert!("Costco".parse::<Store>().is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("dairy & eggs".parse::<Category>().unwrap(), Category::DairyAndEggs);
        assert!("Dairy".parse::<Category>().is_err());
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("L".parse::<Unit>().unwrap(), Unit::Litre);
        assert!("bushel".parse::<Unit>().is_err());
        assert_eq!(Unit::default(), Unit::Each);
    }

    #[test]
    fn test_stock_and_prices() {
        let product = milk();
        assert!(product.in_stock_at(Store::Coles));
        assert!(!product.in_stock_at(Store::Aldi));
        assert!(!product.in_stock_at(Store::Woolworths));
        assert_eq!(product.stores_in_stock(), 1);
        assert_eq!(product.cheapest_price(), Some(2.19));
        assert_eq!(product.price_at(Store::Woolworths), None);
    }

    #[test]
    fn test_default_unit_follows_store_order() {
        let product = Product::new("x", "Mixed", Category::Pantry)
            .with_offer(Store::Iga, 1.0, Unit::Pack, true)
            .with_offer(Store::Coles, 1.0, Unit::Gram, true);
        assert_eq!(product.default_unit(), Some(Unit::Gram));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(json["category"], "Dairy & Eggs");
        assert_eq!(json["stores"]["Coles"]["inStock"], true);
        assert_eq!(json["stores"]["Coles"]["unit"], "L");
        assert!(json.get("brands").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, milk());
    }
}
