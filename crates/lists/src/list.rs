//! Shopping lists and the book that owns them.

use crate::error::{ListError, Result};
use crate::item::{check_quantity, ItemUpdate, ShoppingItem};
use chrono::{DateTime, Utc};
use grocer_catalog::Store;
use grocer_core::validation::{validate_email, validate_name};
use serde::{Deserialize, Serialize};

/// A named shopping list, optionally tied to one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_with: Vec<String>,
}

/// Purchased vs. total items of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListProgress {
    pub purchased: usize,
    pub total: usize,
    /// Rounded percentage, 0 for an empty list
    pub percent: u8,
}

impl ShoppingList {
    /// Empty, unshared list created at `now`.
    pub fn new(name: impl Into<String>, store: Option<Store>, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("list-{}", uuid::Uuid::new_v4().simple()),
            name: name.into(),
            store,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
            shared: false,
            shared_with: Vec::new(),
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    fn item_mut(&mut self, item_id: &str) -> Result<&mut ShoppingItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| ListError::ItemNotFound(item_id.to_string()))
    }

    pub fn pending_items(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|i| !i.purchased)
    }

    pub fn purchased_items(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|i| i.purchased)
    }

    pub fn progress(&self) -> ListProgress {
        let total = self.items.len();
        let purchased = self.purchased_items().count();
        let percent = if total == 0 {
            0
        } else {
            (purchased as f64 / total as f64 * 100.0).round() as u8
        };
        ListProgress {
            purchased,
            total,
            percent,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update of a list's own fields.
#[derive(Debug, Clone, Default)]
pub struct ListUpdate {
    pub name: Option<String>,
    /// `Some(None)` unassigns the store.
    pub store: Option<Option<Store>>,
}

/// Every shopping list plus the one currently active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBook {
    lists: Vec<ShoppingList>,
    #[serde(default)]
    active_list_id: Option<String>,
}

fn check_name(name: &str) -> Result<()> {
    match validate_name("name", name).errors().first() {
        Some(error) => Err(ListError::invalid("name", error.message.clone())),
        None => Ok(()),
    }
}

impl ListBook {
    /// Book holding `lists`; the first list becomes active.
    pub fn new(lists: Vec<ShoppingList>) -> Self {
        let active_list_id = lists.first().map(|l| l.id.clone());
        Self {
            lists,
            active_list_id,
        }
    }

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&ShoppingList> {
        self.get(id)
            .ok_or_else(|| ListError::ListNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ShoppingList> {
        self.lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ListError::ListNotFound(id.to_string()))
    }

    pub fn active(&self) -> Option<&ShoppingList> {
        self.active_list_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_list_id.as_deref()
    }

    /// Make `id` the active list; `None` clears it.
    pub fn set_active(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.active_list_id = id.map(str::to_string);
        Ok(())
    }

    /// Append an existing list.
    pub fn add_list(&mut self, list: ShoppingList) -> &ShoppingList {
        tracing::info!(id = %list.id, name = %list.name, items = list.items.len(), "List added");
        self.lists.push(list);
        &self.lists[self.lists.len() - 1]
    }

    /// Create an empty list.
    pub fn create_list(&mut self, name: &str, store: Option<Store>) -> Result<&ShoppingList> {
        let name = name.trim();
        check_name(name)?;
        Ok(self.add_list(ShoppingList::new(name, store, Utc::now())))
    }

    pub fn update_list(&mut self, id: &str, update: ListUpdate) -> Result<&ShoppingList> {
        if let Some(name) = &update.name {
            check_name(name.trim())?;
        }
        let list = self.get_mut(id)?;
        if let Some(name) = update.name {
            list.name = name.trim().to_string();
        }
        if let Some(store) = update.store {
            list.store = store;
        }
        list.touch();
        Ok(&*list)
    }

    /// Remove a list.
    ///
    /// When the active list is deleted, the first remaining list becomes
    /// active, or none if the book is now empty.
    pub fn delete_list(&mut self, id: &str) -> Result<ShoppingList> {
        let position = self
            .lists
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| ListError::ListNotFound(id.to_string()))?;
        let removed = self.lists.remove(position);

        if self.active_list_id.as_deref() == Some(id) {
            self.active_list_id = self.lists.first().map(|l| l.id.clone());
        }

        tracing::info!(id = %removed.id, "List deleted");
        Ok(removed)
    }

    pub fn add_item(&mut self, list_id: &str, item: ShoppingItem) -> Result<&ShoppingItem> {
        check_quantity(item.quantity)?;
        let list = self.get_mut(list_id)?;
        list.items.push(item);
        list.touch();
        Ok(&list.items[list.items.len() - 1])
    }

    pub fn update_item(
        &mut self,
        list_id: &str,
        item_id: &str,
        update: ItemUpdate,
    ) -> Result<&ShoppingItem> {
        let list = self.get_mut(list_id)?;
        update.apply(list.item_mut(item_id)?)?;
        list.touch();
        list.item(item_id)
            .ok_or_else(|| ListError::ItemNotFound(item_id.to_string()))
    }

    pub fn remove_item(&mut self, list_id: &str, item_id: &str) -> Result<ShoppingItem> {
        let list = self.get_mut(list_id)?;
        let position = list
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| ListError::ItemNotFound(item_id.to_string()))?;
        let removed = list.items.remove(position);
        list.touch();
        Ok(removed)
    }

    /// Flip an item's purchased flag and return the new value.
    pub fn toggle_purchased(&mut self, list_id: &str, item_id: &str) -> Result<bool> {
        let list = self.get_mut(list_id)?;
        let item = list.item_mut(item_id)?;
        item.purchased = !item.purchased;
        let purchased = item.purchased;
        list.touch();
        Ok(purchased)
    }

    /// Share a list with `email`. Sharing twice with the same address is a no-op.
    pub fn share(&mut self, list_id: &str, email: &str) -> Result<&ShoppingList> {
        let email = email.trim();
        if let Some(error) = validate_email(email).errors().first() {
            return Err(ListError::invalid("email", error.message.clone()));
        }

        let list = self.get_mut(list_id)?;
        if !list.shared_with.iter().any(|e| e.eq_ignore_ascii_case(email)) {
            list.shared_with.push(email.to_string());
        }
        list.shared = true;
        list.touch();
        tracing::info!(id = %list.id, recipients = list.shared_with.len(), "List shared");
        Ok(&*list)
    }

    /// Stop sharing with `email`; the list stays shared while anyone is left.
    pub fn unshare(&mut self, list_id: &str, email: &str) -> Result<&ShoppingList> {
        let email = email.trim();
        let list = self.get_mut(list_id)?;
        list.shared_with.retain(|e| !e.eq_ignore_ascii_case(email));
        list.shared = !list.shared_with.is_empty();
        list.touch();
        Ok(&*list)
    }

    /// Most recently updated lists first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<&ShoppingList> {
        let mut lists: Vec<&ShoppingList> = self.lists.iter().collect();
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        lists.truncate(limit);
        lists
    }

    /// Lists assigned to `store`, most recently updated first.
    pub fn for_store(&self, store: Store) -> Vec<&ShoppingList> {
        let mut lists: Vec<&ShoppingList> =
            self.lists.iter().filter(|l| l.store == Some(store)).collect();
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        lists
    }
}
