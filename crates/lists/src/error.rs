//! Error types for the lists crate.

use thiserror::Error;

/// Result type alias for list, cart and profile operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur while changing lists, the cart or the profile.
#[derive(Debug, Error)]
pub enum ListError {
    /// No list with this id
    #[error("Shopping list not found: {0}")]
    ListNotFound(String),

    /// No item with this id in the list or cart
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Checkout with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Name, email or quantity rejected by validation
    #[error("Invalid {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ListError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ListError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ListErrorCode {
        match self {
            ListError::ListNotFound(_) => ListErrorCode::ListNotFound,
            ListError::ItemNotFound(_) => ListErrorCode::ItemNotFound,
            ListError::EmptyCart => ListErrorCode::EmptyCart,
            ListError::Invalid { .. } => ListErrorCode::Invalid,
        }
    }
}

/// Error code for integration with grocer-core error handling.
/// Range: 13xxx for list errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorCode {
    /// No list with this id
    ListNotFound = 13001,
    /// No item with this id
    ItemNotFound = 13002,
    /// Checkout with an empty cart
    EmptyCart = 13003,
    /// Rejected input
    Invalid = 13004,
}

impl From<ListError> for grocer_core::Error {
    fn from(err: ListError) -> Self {
        use grocer_core::ErrorCode;

        match &err {
            ListError::ListNotFound(id) => grocer_core::Error::list_not_found(id),
            ListError::ItemNotFound(_) => {
                grocer_core::Error::new(ErrorCode::ItemNotFound, err.to_string())
            }
            ListError::EmptyCart => grocer_core::Error::empty_cart(),
            ListError::Invalid { .. } => grocer_core::Error::validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ListError::EmptyCart.code() as u32, 13003);
        assert_eq!(ListError::invalid("email", "bad").code(), ListErrorCode::Invalid);
    }

    #[test]
    fn test_core_conversion() {
        let err: grocer_core::Error = ListError::ListNotFound("list9".to_string()).into();
        assert_eq!(err.code, grocer_core::ErrorCode::ListNotFound);
        assert_eq!(err.exit_code(), grocer_core::error::exit_codes::NOT_FOUND);
    }
}
