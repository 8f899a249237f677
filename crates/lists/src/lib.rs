//! Shopping lists, cart and user profile for the grocer tools.
//!
//! This crate provides:
//! - Shopping lists with items, sharing and progress
//! - A cart that merges repeated products and checks out into a list
//! - The user profile with favorite products
//! - The persisted application state and its blob storage backends
//!
//! # Example
//!
//! ```
//! use grocer_catalog::Store;
//! use grocer_lists::{AppState, MemoryStore, ShoppingItem};
//!
//! let store = MemoryStore::new();
//! let mut state = AppState::load(&store).unwrap();
//!
//! let bananas = state.products.get("p1").unwrap().clone();
//! state.cart.add(ShoppingItem::for_product(&bananas, Store::Aldi)).unwrap();
//! assert!((state.cart.subtotal(&state.products, Store::Aldi) - 3.40).abs() < 1e-9);
//!
//! state.save(&store).unwrap();
//! ```

mod cart;
mod error;
mod item;
mod list;
mod profile;
mod state;
mod storage;

pub use cart::{Cart, MIN_QUANTITY};
pub use error::{ListError, ListErrorCode, Result};
pub use item::{ItemUpdate, ShoppingItem};
pub use list::{ListBook, ListProgress, ListUpdate, ShoppingList};
pub use profile::UserProfile;
pub use state::{AppState, STORAGE_KEY};
pub use storage::{BlobStore, FileStore, MemoryStore};
