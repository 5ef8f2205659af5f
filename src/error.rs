use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Validation failed")]
    Validation(String),

    #[error("Malformed request body")]
    InvalidBody(#[from] JsonRejection),

    /// The requested change is not legal from the order's current state.
    #[error("State conflict")]
    Conflict(String),

    #[error("Database error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

/// Uniform failure envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub details: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> String {
        match self {
            AppError::NotFound => "resource not found".to_string(),
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::InvalidBody(rejection) => rejection.body_text(),
            AppError::OrmError(err) => err.to_string(),
            AppError::Internal(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = self.details();

        if status.is_server_error() {
            tracing::error!(error = %self, details = %details, "request failed");
        }

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
