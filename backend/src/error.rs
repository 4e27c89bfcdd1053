//! Error handling for the farm advisory server
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error(transparent)]
    InvalidInput(#[from] shared::ValidationError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

/// JSON body extractor whose rejections use the error response format
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    /// Same text as `message_en`
    pub message: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    fn new(code: &str, message_en: String, message_hi: String, field: Option<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message_en.clone(),
            message_en,
            message_hi,
            field,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidInput(err) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new(
                    "INVALID_INPUT",
                    err.message().to_string(),
                    format!("अमान्य इनपुट: {}", err.field()),
                    Some(err.field().to_string()),
                ),
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new(
                    "VALIDATION_ERROR",
                    msg.clone(),
                    format!("डेटा मान्य नहीं है: {}", msg),
                    None,
                ),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
