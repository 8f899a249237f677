//! The whole persisted application state.

use crate::cart::Cart;
use crate::error::Result;
use crate::item::ShoppingItem;
use crate::list::{ListBook, ShoppingList};
use crate::profile::UserProfile;
use crate::storage::BlobStore;
use chrono::{DateTime, TimeZone, Utc};
use grocer_catalog::{Catalog, Store, Unit};
use serde::{Deserialize, Serialize};

/// Key the state blob is stored under.
pub const STORAGE_KEY: &str = "aussie-grocery-app-storage";

/// Catalog, lists, user, cart and UI selections, saved as one blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub products: Catalog,
    pub lists: ListBook,
    pub user: UserProfile,
    #[serde(default)]
    pub cart: Cart,
    #[serde(default)]
    pub selected_store: Option<Store>,
    #[serde(default)]
    pub offline: bool,
}

fn seed_date(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_item(id: &str, product_id: &str, quantity: f64, unit: Unit, purchased: bool) -> ShoppingItem {
    let mut item = ShoppingItem::new(product_id, quantity, unit);
    item.id = id.to_string();
    item.purchased = purchased;
    item
}

fn seed_lists() -> Vec<ShoppingList> {
    let mut weekly = ShoppingList::new("Weekly Groceries", Some(Store::Woolworths), seed_date(5, 10));
    weekly.id = "list1".to_string();
    weekly.updated_at = seed_date(5, 12);
    weekly.items = vec![
        seed_item("item1", "p6", 2.0, Unit::Litre, false),
        seed_item("item2", "p13", 1.0, Unit::Each, true),
        seed_item("item3", "p7", 1.0, Unit::Pack, false).with_notes("Free range only"),
    ];

    let mut bbq = ShoppingList::new("BBQ Party", Some(Store::Coles), seed_date(5, 15));
    bbq.id = "list2".to_string();
    bbq.items = vec![
        seed_item("item4", "p10", 2.0, Unit::Kilogram, false),
        seed_item("item5", "p4", 1.0, Unit::Kilogram, false),
    ];
    bbq.shared = true;
    bbq.shared_with = vec!["friend@example.com".to_string()];

    vec![weekly, bbq]
}

impl AppState {
    /// First-run state: seed catalog, two sample lists, the sample user and
    /// an empty cart.
    pub fn seeded() -> Self {
        Self {
            products: Catalog::seeded(),
            lists: ListBook::new(seed_lists()),
            user: UserProfile {
                id: "user1".to_string(),
                name: "Alex".to_string(),
                email: "alex@example.com".to_string(),
                favorites: vec!["p6".into(), "p1".into(), "p24".into()],
                preferred_store: Some(Store::Woolworths),
            },
            cart: Cart::default(),
            selected_store: None,
            offline: false,
        }
    }

    /// Load the saved state, or the seeded state when nothing is saved yet.
    pub fn load(store: &dyn BlobStore) -> grocer_core::Result<Self> {
        match store.load(STORAGE_KEY)? {
            Some(blob) => {
                let state: AppState = serde_json::from_str(&blob)?;
                tracing::debug!(
                    products = state.products.len(),
                    lists = state.lists.len(),
                    "State loaded"
                );
                Ok(state)
            }
            None => {
                tracing::debug!("No saved state, starting from seed data");
                Ok(Self::seeded())
            }
        }
    }

    pub fn save(&self, store: &dyn BlobStore) -> grocer_core::Result<()> {
        let blob = serde_json::to_string(self)?;
        store.save(STORAGE_KEY, &blob)
    }

    /// Check the cart out into a new list assigned to the preferred store.
    /// The new list becomes active and its id is returned.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> Result<String> {
        let list = self.cart.checkout(self.user.preferred_store, now)?;
        let id = list.id.clone();
        self.lists.add_list(list);
        self.lists.set_active(Some(id.as_str()))?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;
    use crate::storage::{FileStore, MemoryStore};
    use grocer_catalog::ProductId;

    #[test]
    fn test_seeded_state() {
        let state = AppState::seeded();
        assert_eq!(state.products.len(), 30);
        assert_eq!(state.lists.len(), 2);
        assert_eq!(state.lists.active_id(), Some("list1"));
        assert_eq!(state.user.favorites.len(), 3);
        assert!(state.cart.is_empty());

        let weekly = state.lists.get("list1").unwrap();
        assert_eq!(weekly.progress().purchased, 1);
        assert_eq!(weekly.items[2].notes.as_deref(), Some("Free range only"));
        assert!(state.lists.get("list2").unwrap().shared);
    }

    #[test]
    fn test_seeded_items_reference_catalog() {
        let state = AppState::seeded();
        for list in state.lists.lists() {
            for item in &list.items {
                assert!(state.products.get(item.product_id.as_str()).is_some());
            }
        }
    }

    #[test]
    fn test_load_defaults_to_seed() {
        let store = MemoryStore::new();
        assert_eq!(AppState::load(&store).unwrap(), AppState::seeded());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let mut state = AppState::seeded();
        state.user.add_favorite("p2");
        state.selected_store = Some(Store::Aldi);
        state.save(&store).unwrap();

        let loaded = AppState::load(&store).unwrap();
        assert_eq!(loaded, state);
        assert!(loaded.user.favorites.contains(&ProductId::from("p2")));
        assert!(dir.path().join(format!("{}.json", STORAGE_KEY)).exists());
    }

    #[test]
    fn test_corrupt_state_is_an_error() {
        let store = MemoryStore::new();
        store.save(STORAGE_KEY, "{not json").unwrap();
        let err = AppState::load(&store).unwrap_err();
        assert_eq!(err.code, grocer_core::ErrorCode::CorruptState);
    }

    #[test]
    fn test_checkout_activates_new_list() {
        let mut state = AppState::seeded();
        assert!(matches!(state.checkout(Utc::now()), Err(ListError::EmptyCart)));

        let milk = state.products.get("p6").unwrap();
        state
            .cart
            .add(ShoppingItem::for_product(milk, Store::Woolworths))
            .unwrap();
        let id = state.checkout(Utc::now()).unwrap();

        assert_eq!(state.lists.len(), 3);
        assert_eq!(state.lists.active_id(), Some(id.as_str()));
        assert_eq!(state.lists.get(&id).unwrap().store, Some(Store::Woolworths));
        assert!(state.cart.is_empty());
    }
}
