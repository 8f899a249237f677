//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while reading or changing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with this id already exists
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product data rejected by validation
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Store name outside the supported set
    #[error("Unknown store: {0}")]
    UnknownStore(String),

    /// Category name outside the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unit of measure outside the supported set
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Error code for integration with grocer-core error handling.
/// Range: 12xxx for catalog errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// No product with this id
    ProductNotFound = 12001,
    /// Duplicate product id
    DuplicateProduct = 12002,
    /// Product data rejected by validation
    InvalidProduct = 12003,
    /// Unknown store, category or unit name
    UnknownName = 12004,
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CatalogErrorCode {
        match self {
            CatalogError::ProductNotFound(_) => CatalogErrorCode::ProductNotFound,
            CatalogError::DuplicateProduct(_) => CatalogErrorCode::DuplicateProduct,
            CatalogError::InvalidProduct(_) => CatalogErrorCode::InvalidProduct,
            CatalogError::UnknownStore(_)
            | CatalogError::UnknownCategory(_)
            | CatalogError::UnknownUnit(_) => CatalogErrorCode::UnknownName,
        }
    }
}

impl From<CatalogError> for grocer_core::Error {
    fn from(err: CatalogError) -> Self {
        use grocer_core::ErrorCode;

        match &err {
            CatalogError::ProductNotFound(id) => grocer_core::Error::product_not_found(id),
            CatalogError::DuplicateProduct(_) => {
                grocer_core::Error::new(ErrorCode::DuplicateProduct, err.to_string())
            }
            CatalogError::InvalidProduct(_) => grocer_core::Error::validation(err.to_string()),
            CatalogError::UnknownStore(_) => {
                grocer_core::Error::new(ErrorCode::InvalidInput, err.to_string())
                    .with_suggestion("Known stores: Woolworths, Coles, Aldi, IGA")
            }
            CatalogError::UnknownCategory(_) | CatalogError::UnknownUnit(_) => {
                grocer_core::Error::new(ErrorCode::InvalidInput, err.to_string())
            }
        }
    }
}
