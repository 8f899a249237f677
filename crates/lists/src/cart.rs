//! The shopping cart.

use crate::error::{ListError, Result};
use crate::item::{check_quantity, ShoppingItem};
use crate::list::ShoppingList;
use chrono::{DateTime, Utc};
use grocer_catalog::{Catalog, Store};
use serde::{Deserialize, Serialize};

/// Smallest quantity kept in the cart; anything at or below is removed.
pub const MIN_QUANTITY: f64 = 0.01;

/// Items waiting to be turned into a shopping list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<ShoppingItem>,
}

impl Cart {
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, item_id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    fn position(&self, item_id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| ListError::ItemNotFound(item_id.to_string()))
    }

    /// Add an item. A product already in the cart has its quantity increased
    /// instead of getting a second line.
    pub fn add(&mut self, item: ShoppingItem) -> Result<&ShoppingItem> {
        check_quantity(item.quantity)?;
        let index = match self.items.iter().position(|i| i.product_id == item.product_id) {
            Some(index) => {
                let merged = self.items[index].quantity + item.quantity;
                check_quantity(merged)?;
                self.items[index].quantity = merged;
                index
            }
            None => {
                self.items.push(item);
                self.items.len() - 1
            }
        };
        Ok(&self.items[index])
    }

    /// Set an item's quantity.
    ///
    /// Returns the new quantity, or `None` when it was at or below
    /// [`MIN_QUANTITY`] and the item was removed.
    pub fn update_quantity(&mut self, item_id: &str, quantity: f64) -> Result<Option<f64>> {
        let index = self.position(item_id)?;
        if quantity.is_nan() {
            return Err(ListError::invalid("quantity", "must be a number"));
        }
        if quantity <= MIN_QUANTITY {
            self.items.remove(index);
            return Ok(None);
        }
        check_quantity(quantity)?;
        self.items[index].quantity = quantity;
        Ok(Some(quantity))
    }

    /// Change an item's quantity by `delta`, never going below [`MIN_QUANTITY`].
    /// An item that reaches the minimum is removed.
    pub fn adjust_quantity(&mut self, item_id: &str, delta: f64) -> Result<Option<f64>> {
        let index = self.position(item_id)?;
        let quantity = (self.items[index].quantity + delta).max(MIN_QUANTITY);
        self.update_quantity(item_id, quantity)
    }

    pub fn remove(&mut self, item_id: &str) -> Result<ShoppingItem> {
        let index = self.position(item_id)?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total price of the cart at `store`.
    ///
    /// Items whose product is unknown add nothing; products the store does not
    /// carry count at price 0.
    pub fn subtotal(&self, catalog: &Catalog, store: Store) -> f64 {
        self.items
            .iter()
            .filter_map(|item| {
                catalog
                    .get(item.product_id.as_str())
                    .map(|product| product.price_at(store).unwrap_or(0.0) * item.quantity)
            })
            .sum()
    }

    /// Turn the cart into a new shopping list and empty it.
    ///
    /// The list is named after the checkout date, assigned to `store` and not
    /// shared.
    pub fn checkout(&mut self, store: Option<Store>, now: DateTime<Utc>) -> Result<ShoppingList> {
        if self.is_empty() {
            return Err(ListError::EmptyCart);
        }

        let name = format!("Shopping - {}", now.format("%-d/%-m/%Y"));
        let mut list = ShoppingList::new(name, store, now);
        list.items = std::mem::take(&mut self.items);

        tracing::info!(id = %list.id, items = list.items.len(), "Cart checked out");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use grocer_catalog::{Category, Product, Unit};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("p6", "Milk", Category::DairyAndEggs)
                .with_offer(Store::Woolworths, 2.20, Unit::Litre, true)
                .with_offer(Store::Coles, 2.30, Unit::Litre, true),
            Product::new("p1", "Bananas", Category::FreshProduce)
                .with_offer(Store::Coles, 3.90, Unit::Kilogram, true),
        ])
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::default();
        cart.add(ShoppingItem::new("p6", 1.0, Unit::Litre)).unwrap();
        let merged = cart.add(ShoppingItem::new("p6", 2.0, Unit::Litre)).unwrap();
        assert_eq!(merged.quantity, 3.0);
        assert_eq!(cart.len(), 1);

        cart.add(ShoppingItem::new("p1", 1.0, Unit::Kilogram)).unwrap();
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_rejects_merged_quantity_over_limit() {
        let mut cart = Cart::default();
        let id = cart.add(ShoppingItem::new("p6", 9000.0, Unit::Litre)).unwrap().id.clone();

        let err = cart.add(ShoppingItem::new("p6", 9000.0, Unit::Litre)).unwrap_err();
        assert!(matches!(err, ListError::Invalid { .. }));
        assert_eq!(cart.get(&id).unwrap().quantity, 9000.0);
        assert_eq!(cart.update_quantity(&id, 9000.0).unwrap(), Some(9000.0));
    }

    #[test]
    fn test_adjust_clamps_and_removes() {
        let mut cart = Cart::default();
        let id = cart.add(ShoppingItem::new("p6", 1.0, Unit::Litre)).unwrap().id.clone();

        assert_eq!(cart.adjust_quantity(&id, 1.0).unwrap(), Some(2.0));
        assert_eq!(cart.adjust_quantity(&id, -1.5).unwrap(), Some(0.5));
        assert_eq!(cart.adjust_quantity(&id, -1.0).unwrap(), None);
        assert!(cart.is_empty());
        assert!(matches!(cart.adjust_quantity(&id, 1.0), Err(ListError::ItemNotFound(_))));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        let id = cart.add(ShoppingItem::new("p6", 1.0, Unit::Litre)).unwrap().id.clone();
        assert_eq!(cart.update_quantity(&id, 4.0).unwrap(), Some(4.0));
        assert!(cart.update_quantity(&id, 1e9).is_err());
        assert_eq!(cart.update_quantity(&id, 0.0).unwrap(), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::default();
        cart.add(ShoppingItem::new("p6", 2.0, Unit::Litre)).unwrap();
        cart.add(ShoppingItem::new("p1", 1.0, Unit::Kilogram)).unwrap();
        cart.add(ShoppingItem::new("gone", 5.0, Unit::Each)).unwrap();

        let catalog = catalog();
        assert!((cart.subtotal(&catalog, Store::Coles) - 8.50).abs() < 1e-9);
        // bananas are not sold at Woolworths and count as free
        assert!((cart.subtotal(&catalog, Store::Woolworths) - 4.40).abs() < 1e-9);
    }

    #[test]
    fn test_checkout() {
        let mut cart = Cart::default();
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap();
        assert!(matches!(cart.checkout(None, now), Err(ListError::EmptyCart)));

        cart.add(ShoppingItem::new("p6", 2.0, Unit::Litre)).unwrap();
        let list = cart.checkout(Some(Store::Woolworths), now).unwrap();

        assert_eq!(list.name, "Shopping - 7/3/2024");
        assert_eq!(list.store, Some(Store::Woolworths));
        assert_eq!(list.items.len(), 1);
        assert!(!list.shared);
        assert_eq!(list.created_at, now);
        assert!(cart.is_empty());
    }
}
