use crate::models::Notice;
use axum::{http::StatusCode, Json};
use thiserror::Error;

/// Rejections raised by `EntryLog::append`. Never fatal; the user corrects
/// the form and resubmits.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("please fill in the {field} field")]
    MissingField { field: &'static str },
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(Notice::failure(self.message))).into_response()
    }
}
