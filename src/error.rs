//! Error types for Stockroom
//!
//! The core has exactly two failure modes, both recoverable: adding an id
//! that already exists, and querying or removing an id that does not. Each
//! variant carries the offending id so the presentation layer can render a
//! useful message. The core performs no logging and no retries; callers
//! decide policy.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type for record store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An item with this id is already stored
    #[error("duplicate item id: {0}")]
    DuplicateKey(String),

    /// No item with this id is stored
    #[error("no item with id: {0}")]
    ItemNotFound(String),
}

impl StoreError {
    /// The id that caused the failure
    pub fn id(&self) -> &str {
        match self {
            StoreError::DuplicateKey(id) => id,
            StoreError::ItemNotFound(id) => id,
        }
    }
}
