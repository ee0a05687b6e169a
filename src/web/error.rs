//! HTTP mapping for `SlipboxError`

use crate::error::SlipboxError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl IntoResponse for SlipboxError {
    fn into_response(self) -> Response {
        match self {
            SlipboxError::NotFound(_) | SlipboxError::InvalidDocumentName(_) => {
                log::debug!("{}", self);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            other => {
                log::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server error\n{}", other),
                )
                    .into_response()
            }
        }
    }
}
