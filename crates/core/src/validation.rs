//! Configuration and input validation
//!
//! Provides validation for:
//! - Configuration values
//! - User-entered product names, quantities and prices
//! - Email addresses used when sharing lists
//!
//! # Example
//!
//! ```
//! use grocer_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "Oat Milk")
//!     .max_length("name", "Oat Milk", 80)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").expect("email pattern is valid"));

/// Longest product or list name accepted from user input.
pub const MAX_NAME_LENGTH: usize = 80;

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not empty
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate maximum length in characters
    pub fn max_length(mut self, field: &str, value: &str, max: usize) -> Self {
        let len = value.chars().count();
        if len > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be at most {} characters", max),
                code: "MAX_LENGTH".to_string(),
                expected: Some(format!("<= {} chars", max)),
                actual: Some(format!("{} chars", len)),
            });
        }
        self
    }

    /// Validate against a compiled pattern
    pub fn matches(mut self, field: &str, value: &str, re: &Regex, description: &str) -> Self {
        if !re.is_match(value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must match {}", description),
                code: "PATTERN".to_string(),
                expected: Some(description.to_string()),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value is in a list of allowed values (case-insensitive)
    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be one of: {}", allowed.join(", ")),
                code: "ONE_OF".to_string(),
                expected: Some(allowed.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        // Written so that NaN fails too.
        if !(value >= min && value <= max) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {} and {}", min, max),
                code: "RANGE".to_string(),
                expected: Some(format!("{} - {}", min, max)),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Add a custom validation
    pub fn custom<F>(mut self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        if let Some(message) = f() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message,
                code: "CUSTOM".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Validate a product or list name entered by the user
pub fn validate_name(field: &str, name: &str) -> ValidationResult {
    Validator::new()
        .required(field, name)
        .max_length(field, name.trim(), MAX_NAME_LENGTH)
        .validate()
}

/// Validate an email address a list is shared with
pub fn validate_email(email: &str) -> ValidationResult {
    Validator::new()
        .required("email", email)
        .matches("email", email.trim(), &EMAIL_RE, "email format")
        .validate()
}

/// Validate a shopping quantity (positive, finite)
pub fn validate_quantity(quantity: f64) -> ValidationResult {
    Validator::new()
        .range("quantity", quantity, 0.01, 10_000.0)
        .validate()
}

/// Validate a shelf price (zero allowed for user-added products)
pub fn validate_price(price: f64) -> ValidationResult {
    Validator::new()
        .range("price", price, 0.0, 100_000.0)
        .validate()
}
