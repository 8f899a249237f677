//! CLI utilities for the grocer tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages and error reports
//! - Price, quantity and progress formatting

#![warn(missing_docs)]

pub mod format;
pub mod output;

pub use output::{OutputFormat, Status};
