//! API error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error::LesewertError;

use super::types::ErrorResponse;

/// Error returned by API handlers.
///
/// Wraps a [`LesewertError`] with the HTTP status it maps to: `Validation`
/// becomes 400, everything else 500. The body is `{"error": message}` with
/// the bare message, not the variant-prefixed display form.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: LesewertError,
}

impl ApiError {
    /// Wrap an error as a 400 Bad Request.
    pub fn validation(error: LesewertError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// Wrap an error as a 500 Internal Server Error.
    pub fn internal(error: LesewertError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<LesewertError> for ApiError {
    fn from(error: LesewertError) -> Self {
        match error {
            LesewertError::Validation { .. } => Self::validation(error),
            _ => Self::internal(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(error = %self.error, "request failed");
        }

        let body = ErrorResponse {
            error: error_message(&self.error),
        };

        (self.status, Json(body)).into_response()
    }
}

/// The bare message carried by an error, without the variant prefix.
fn error_message(error: &LesewertError) -> String {
    match error {
        LesewertError::Validation { message, .. }
        | LesewertError::Serialization { message, .. }
        | LesewertError::External { message, .. }
        | LesewertError::Config { message, .. } => message.clone(),
        LesewertError::Io(source) => source.to_string(),
        LesewertError::Other(message) => message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err: ApiError = LesewertError::validation("Text is required").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let err: ApiError = LesewertError::external("upstream down").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = LesewertError::Other("boom".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_body_carries_bare_message() {
        assert_eq!(
            error_message(&LesewertError::validation("Text is required")),
            "Text is required"
        );
        assert_eq!(error_message(&LesewertError::Other("boom".to_string())), "boom");
    }
}
