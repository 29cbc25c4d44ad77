//! JSON bodies posted by the controller.
//!
//! The controller firmware does not always send a `Content-Type` header, so a
//! body without one is read as JSON. A body that declares another media type
//! is refused.

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode `body` as `T` unless the request declares a non-JSON content type.
pub(crate) fn parse_json<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<T, ApiError> {
    if !accepts_json(headers) {
        return Err(ApiError::ContentType);
    }
    Ok(serde_json::from_slice(body)?)
}

/// `true` when the header is absent, `application/json` or `application/*+json`.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
