//! Configuration loading and schema definitions
//!
//! Defaults for store selection, search ordering, state location and logging.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
