//! Translation of persistence failures into API error shapes.
//!
//! Create and update handlers hand a [`StoreError`] to
//! [`ValidationFailure::normalize`] and render the result. The conversion is
//! also wired into `From<StoreError> for AppError` so `?` normalizes at every
//! call site.

use anyhow::anyhow;
use axum::http::StatusCode;

use crate::errors::AppError;
use crate::store::{EMAIL_FIELD, StoreError};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "email address must be different for each user";

/// Normalized outcome of a failed create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub status: StatusCode,
    /// Field messages safe to return; empty for server errors.
    pub errors: Vec<String>,
    /// Summary for the server log. For server errors this is the original
    /// failure text and is never sent to the client.
    pub message: String,
}

impl ValidationFailure {
    pub fn normalize(err: &StoreError) -> Self {
        match err {
            StoreError::Validation(messages) if !messages.is_empty() => Self {
                status: StatusCode::BAD_REQUEST,
                errors: messages.clone(),
                message: err.to_string(),
            },
            StoreError::UniqueViolation { field } if field == EMAIL_FIELD => Self {
                status: StatusCode::BAD_REQUEST,
                errors: vec![DUPLICATE_EMAIL_MESSAGE.to_string()],
                message: err.to_string(),
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                errors: Vec::new(),
                message: format!("{other:#}"),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let failure = ValidationFailure::normalize(&err);

        if failure.status.is_client_error() {
            return AppError::with_errors(failure.status, anyhow!(failure.message), failure.errors);
        }

        match err {
            StoreError::Unexpected(source) => AppError::internal(source),
            other => AppError::internal(other),
        }
    }
}
