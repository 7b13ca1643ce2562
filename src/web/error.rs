use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::services::activities_service::SignupError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error("database error {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    InvalidQuery(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Signup(SignupError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Signup(
                SignupError::AlreadyRegistered
                | SignupError::NotRegistered
                | SignupError::ActivityFull,
            ) => StatusCode::BAD_REQUEST,
            AppError::Signup(SignupError::InvalidEmail) | AppError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Signup(SignupError::Database(_)) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Every error body is `{"detail": "..."}`; storage errors never leak their text.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
