//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GatewayError`] via `#[from]`. The HTTP adapter maps the three
//! top-level variants onto 400, 404 and 500 respectively.

use std::time::Duration;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// The request itself is unusable.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The path does not carry an RFID at the expected segment.
    #[error("rfid required: /api/data/{{rfid_value}}")]
    MalformedPath,

    /// An RFID was constructed from an empty string.
    #[error("rfid must not be empty")]
    EmptyRfid,
}

/// No stored record satisfies the lookup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// The collection holds no records at all.
    #[error("no device records found in the collection")]
    Empty,

    /// No record carries the requested RFID.
    #[error("device record with rfid '{0}' not found")]
    Rfid(String),
}

/// Failures reaching or decoding from the document store.
///
/// The detail is for server-side logs only and never reaches clients.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The operation did not complete before its deadline.
    #[error("{operation} timed out after {limit:?}")]
    Timeout {
        operation: &'static str,
        limit: Duration,
    },

    /// Driver, connection or decoding failure from a storage adapter.
    #[error("storage backend failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wrap an adapter-specific error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_rfid_when_not_found() {
        let err = NotFoundError::Rfid("TAG123".to_string());
        assert!(err.to_string().contains("TAG123"));
    }

    #[test]
    fn should_hint_expected_path_when_malformed() {
        let err = ValidationError::MalformedPath;
        assert_eq!(err.to_string(), "rfid required: /api/data/{rfid_value}");
    }

    #[test]
    fn should_describe_timeout_with_operation_and_limit() {
        let err = StorageError::Timeout {
            operation: "fetch_latest",
            limit: Duration::from_secs(10),
        };
        assert_eq!(err.to_string(), "fetch_latest timed out after 10s");
    }

    #[test]
    fn should_convert_into_gateway_error_via_from() {
        let err: GatewayError = NotFoundError::Empty.into();
        assert!(matches!(err, GatewayError::NotFound(NotFoundError::Empty)));

        let err: GatewayError = ValidationError::MalformedPath.into();
        assert!(matches!(err, GatewayError::Validation(_)));
    }
}
