//! CLI command implementations

pub mod cart;
pub mod config;
pub mod favorite;
pub mod list;
pub mod product;
pub mod search;
pub mod store;

use grocer_core::{Error, ErrorCode};
use grocer_search::SearchError;

/// Search errors are all bad command-line input.
pub(crate) fn search_error(err: SearchError) -> Error {
    Error::new(ErrorCode::InvalidInput, err.to_string())
        .with_suggestion("Run `grocer search --help` for accepted values")
}
