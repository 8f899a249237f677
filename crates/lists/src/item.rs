//! Shopping list and cart items.

use crate::error::{ListError, Result};
use grocer_catalog::{Product, ProductId, Store, Unit};
use grocer_core::validation::validate_quantity;
use serde::{Deserialize, Serialize};

/// A line on a shopping list or in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub product_id: ProductId,
    pub quantity: f64,
    pub unit: Unit,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShoppingItem {
    /// New, unpurchased item with a fresh id.
    pub fn new(product_id: impl Into<ProductId>, quantity: f64, unit: Unit) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            quantity,
            unit,
            purchased: false,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.trim().is_empty()).then_some(notes);
        self
    }

    /// One of `product`, in the unit `store` sells it in.
    ///
    /// Falls back to `each` when the store does not carry the product.
    pub fn for_product(product: &Product, store: Store) -> Self {
        let unit = product.offer(store).map(|offer| offer.unit).unwrap_or_default();
        Self::new(product.id.clone(), 1.0, unit)
    }
}

/// Partial update of an item. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub purchased: Option<bool>,
    /// `Some(None)` clears the notes.
    pub notes: Option<Option<String>>,
}

impl ItemUpdate {
    pub(crate) fn apply(self, item: &mut ShoppingItem) -> Result<()> {
        if let Some(quantity) = self.quantity {
            check_quantity(quantity)?;
            item.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(purchased) = self.purchased {
            item.purchased = purchased;
        }
        if let Some(notes) = self.notes {
            item.notes = notes;
        }
        Ok(())
    }
}

pub(crate) fn check_quantity(quantity: f64) -> Result<()> {
    let report = validate_quantity(quantity);
    match report.errors().first() {
        Some(error) => Err(ListError::invalid("quantity", error.message.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_catalog::Category;

    #[test]
    fn test_for_product_uses_store_unit() {
        let product = Product::new("p6", "Milk", Category::DairyAndEggs)
            .with_offer(Store::Coles, 2.30, Unit::Litre, true);

        let item = ShoppingItem::for_product(&product, Store::Coles);
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, Unit::Litre);
        assert!(!item.purchased);

        let elsewhere = ShoppingItem::for_product(&product, Store::Iga);
        assert_eq!(elsewhere.unit, Unit::Each);
        assert_ne!(item.id, elsewhere.id);
    }

    #[test]
    fn test_blank_notes_dropped() {
        let item = ShoppingItem::new("p1", 1.0, Unit::Kilogram).with_notes("  ");
        assert!(item.notes.is_none());
        let item = item.with_notes("Ripe ones");
        assert_eq!(item.notes.as_deref(), Some("Ripe ones"));
    }

    #[test]
    fn test_update_rejects_bad_quantity() {
        let mut item = ShoppingItem::new("p1", 1.0, Unit::Kilogram);
        let err = ItemUpdate {
            quantity: Some(0.0),
            ..Default::default()
        }
        .apply(&mut item)
        .unwrap_err();
        assert!(matches!(err, ListError::Invalid { .. }));
        assert_eq!(item.quantity, 1.0);
    }

    #[test]
    fn test_json_shape() {
        let item = ShoppingItem::new("p7", 1.0, Unit::Pack).with_notes("Free range only");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "p7");
        assert_eq!(json["unit"], "pack");
        assert_eq!(json["notes"], "Free range only");
    }
}
