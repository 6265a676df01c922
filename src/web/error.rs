//! Web-layer errors with HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::adapters::StoreError;
use crate::MindcheckError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Session unavailable")]
    SessionUnavailable,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            WebError::SessionUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SESSION_UNAVAILABLE",
                "Session unavailable, reload the page".to_string(),
            ),
            WebError::Internal(detail) => {
                tracing::error!(detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorDetail { code, message },
            }),
        )
            .into_response()
    }
}

impl From<StoreError> for WebError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Session store failure: {}", err);
        WebError::SessionUnavailable
    }
}

impl From<MindcheckError> for WebError {
    fn from(err: MindcheckError) -> Self {
        WebError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_session_unavailable_returns_503() {
        let response = WebError::from(StoreError::LockPoisoned).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["error"]["code"], "SESSION_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let err: WebError = MindcheckError::LockPoisoned("report generator").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }
}
