//! SSR Error Types
//!
//! The single top-level error boundary for the render orchestrator.
//! Every failure raised at any step of a render pass converts into
//! `SsrError` and surfaces as a complete 500 response - never a hung
//! connection or truncated markup. The response body stays generic;
//! the error detail goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors caught at the orchestrator boundary
#[derive(Error, Debug)]
pub enum SsrError {
    /// The render pass failed (data fetch or component failure)
    #[error("Render error: {0}")]
    Render(#[from] crate::render::RenderError),

    /// Asset manifest missing, unreadable, or incomplete
    #[error("Asset manifest error at {path}: {error}")]
    Manifest { path: String, error: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for SsrError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::warn!(
            request_id = %request_id,
            error = %self,
            "Error rendering application"
        );

        let body = ErrorResponse {
            message: "Server error".to_string(),
            request_id,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for SSR operations
pub type SsrResult<T> = Result<T, SsrError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderError;

    #[test]
    fn test_render_error_converts() {
        let err: SsrError = RenderError::Component("boom".into()).into();
        assert!(matches!(err, SsrError::Render(_)));
    }

    #[test]
    fn test_into_response_is_500() {
        let response = SsrError::Internal("oops".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
