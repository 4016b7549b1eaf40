use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Public message for the error body; details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) | AppError::Internal(_) => "internal server error",
            AppError::NotFound(_) => "resource not found",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::BadRequest(_) => "bad request",
            AppError::MethodNotAllowed => "method not allowed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            AppError::Unprocessable(ref msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::NotFound(ref msg) => tracing::debug!("Not found: {}", msg),
            AppError::BadRequest(ref msg) => tracing::debug!("Bad request: {}", msg),
            AppError::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(status, self.public_message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
