use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Language '{0}' not found in the résumé data")]
    LanguageNotFound(String),

    #[error("Document load error: {0}")]
    DocumentLoad(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("PDF print error: {0}")]
    Print(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::LanguageNotFound(_) => {
                (StatusCode::NOT_FOUND, "LANGUAGE_NOT_FOUND", self.to_string())
            }
            AppError::DocumentLoad(msg) => {
                tracing::error!("Document load error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "DOCUMENT_UNAVAILABLE",
                    "Résumé data is not available".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "A text generation error occurred".to_string(),
                )
            }
            AppError::Print(msg) => {
                tracing::error!("PDF print error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PRINT_ERROR",
                    "PDF printing failed".to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IO_ERROR",
                    "A file system error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("tag cannot be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_language_not_found_message() {
        let err = AppError::LanguageNotFound("de".into());
        assert_eq!(err.to_string(), "Language 'de' not found in the résumé data");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
