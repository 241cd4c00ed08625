//! HTTP error response mapping.
//!
//! Every error body is plain text. Storage failures are logged with their
//! full source chain and reach the client only as a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rfidgate_domain::error::GatewayError;

/// Body sent for every storage failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Body sent when a route is called with anything but `GET`.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

/// Maps [`GatewayError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GatewayError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GatewayError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            GatewayError::Storage(err) => {
                tracing::error!(error = %err, detail = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Fallback for non-`GET` methods on every route.
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfidgate_domain::error::{NotFoundError, StorageError, ValidationError};

    #[test]
    fn should_map_validation_to_bad_request() {
        let err = GatewayError::from(ValidationError::MalformedPath);
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let response = ApiError::from(GatewayError::from(NotFoundError::Empty)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_storage_to_500_with_plain_text() {
        let detail = std::io::Error::other("connection reset by 10.0.0.7:27017");
        let err = GatewayError::from(StorageError::backend(detail));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
