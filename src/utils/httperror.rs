//! HTTP error handling and automated response generation
use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::media::errors::MediaError;

/// Represents an HTTP status code, optionally with a custom message.
#[derive(Debug)]
pub struct HttpError {
    /// The numeric HTTP status code to respond with.
    status: StatusCode,
    /// The message to include in the response.
    message: Option<String>,
}

impl From<StatusCode> for HttpError {
    fn from(err: StatusCode) -> Self {
        Self {
            status: err,
            message: None,
        }
    }
}

impl HttpError {
    /// Construct a new HTTP error with a given status code and message.
    pub const fn new(status: StatusCode, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let message = self
            .message
            .unwrap_or_else(|| self.status.canonical_reason().unwrap_or("").to_owned());
        (self.status, Json(json!({"message": message}))).into_response()
    }
}

impl From<MediaError> for HttpError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::OutsideRoot => {
                tracing::warn!("Rejected media path escaping the media root");
            }
            MediaError::NotAFile => tracing::debug!("Media path is not a regular file"),
            MediaError::Io(error) => tracing::debug!("Media lookup failed: {error}"),
        }
        // Never reveal why: a traversal attempt looks exactly like a miss.
        Self::from(StatusCode::NOT_FOUND)
    }
}

/// The "not found" hook for requests no route matches.
pub async fn not_found() -> HttpError {
    HttpError::from(StatusCode::NOT_FOUND)
}

/// The "server error" hook, invoked when a handler panics.
pub fn server_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {detail}");
    HttpError::from(StatusCode::INTERNAL_SERVER_ERROR).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_default_message_is_canonical_reason() {
        let response = HttpError::from(StatusCode::NOT_FOUND).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Not Found");
    }

    #[tokio::test]
    async fn test_custom_message() {
        let response =
            HttpError::new(StatusCode::BAD_REQUEST, Some("Invalid host".to_owned())).into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid host");
    }

    #[test]
    fn test_every_media_error_is_not_found() {
        let errors = [
            MediaError::OutsideRoot,
            MediaError::NotAFile,
            MediaError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)),
        ];
        for err in errors {
            assert_eq!(
                HttpError::from(err).into_response().status(),
                StatusCode::NOT_FOUND
            );
        }
    }

    #[test]
    fn test_server_error_hook_hides_panic_detail() {
        let response = server_error(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
