//! Storage-specific error type wrapping driver errors.

use rfidgate_domain::error::{GatewayError, StorageError};

use crate::document::DocumentError;

/// Errors originating from the MongoDB storage layer.
#[derive(Debug, thiserror::Error)]
pub enum MongoStorageError {
    /// Connection, query or BSON decoding failed inside the driver.
    #[error("mongodb driver error")]
    Driver(#[from] mongodb::error::Error),

    /// A decoded document cannot be represented as a domain record.
    #[error("invalid stored document")]
    InvalidDocument(#[from] DocumentError),
}

impl From<MongoStorageError> for GatewayError {
    fn from(err: MongoStorageError) -> Self {
        Self::Storage(StorageError::backend(err))
    }
}
