//! Core utilities for the grocer tools
//!
//! This crate provides shared functionality used across the workspace:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Validation**: fluent validation of user input and configuration values
//!
//! # Example
//!
//! ```rust,no_run
//! use grocer_core::config::Config;
//!
//! let config = Config::load(None).expect("configuration should load");
//! println!("Pricing falls back to {}", config.schema.general.default_store);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
#[allow(missing_docs)]
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
