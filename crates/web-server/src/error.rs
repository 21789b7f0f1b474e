use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use analytics::AnalyticsError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("{resource} not found: {message}")]
    NotFound { resource: &'static str, message: String },
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn tool_not_found(id: i64) -> Self {
        AppError::NotFound {
            resource: "Tool",
            message: format!("Tool with ID {id} does not exist"),
        }
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::InvalidParameter { field, message } => {
                AppError::Validation { field, message }
            }
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal database error occurred" }),
                )
            }
            AppError::NotFound { resource, message } => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{resource} not found"), "message": message }),
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "details": { field: message } }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
