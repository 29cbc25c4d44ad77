//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use casa_domain::error::ValidationError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A request the API refuses. Every variant answers `400 Bad Request`.
#[derive(Debug)]
pub enum ApiError {
    /// The request declares a content type other than JSON.
    ContentType,
    /// The body is not the expected JSON document.
    Json(serde_json::Error),
    /// The document decoded but holds values the house cannot store.
    Validation(ValidationError),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::ContentType => "expected a JSON request body".to_string(),
            Self::Json(err) => format!("invalid JSON body: {err}"),
            Self::Validation(err) => err.to_string(),
        };
        tracing::debug!(%message, "request rejected");

        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let err = ApiError::from(ValidationError::NonFinite {
            field: "temperature",
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_content_type_error_to_bad_request() {
        assert_eq!(
            ApiError::ContentType.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
