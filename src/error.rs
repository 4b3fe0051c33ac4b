use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned to callers for any fault they cannot correct themselves.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred on the server.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Fields cannot be empty")]
    EmptyField,

    #[error("Route not found")]
    NotFound,

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error envelope shared by every route.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: Some(message.into()),
        }
    }
}

impl AppError {
    /// True for errors caused by the request itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidJson(_) | AppError::MissingFields(_) | AppError::EmptyField
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!(error = %self, "Rejected request");
        }

        let (status, body) = match &self {
            AppError::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(
                    "Invalid JSON",
                    "The request body must be a valid JSON object.",
                ),
            ),
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(
                    "Missing Required Fields",
                    format!("Please provide: {}", fields.join(", ")),
                ),
            ),
            AppError::EmptyField => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Validation Error", "Fields cannot be empty."),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("Not Found", "The requested resource was not found."),
            ),
            _ => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal Server Error", INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
