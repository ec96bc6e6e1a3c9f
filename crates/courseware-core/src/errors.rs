use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The only message an unauthenticated caller ever sees.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Message returned in place of any internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Application error carried through handlers and rendered as JSON.
///
/// `error` holds the full server-side context and is never serialized.
/// `errors` is the list of messages that is safe to show the client.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub errors: Vec<String>,
}

/// Server-side detail of a failed request.
///
/// Attached to the response extensions by [`AppError::into_response`] so the
/// request logging middleware can decide whether to record it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub detail: String,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        let error = err.into();
        let errors = if status.is_server_error() {
            Vec::new()
        } else {
            vec![error.to_string()]
        };

        Self {
            status,
            error,
            errors,
        }
    }

    pub fn with_errors<E>(status: StatusCode, err: E, errors: Vec<String>) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            errors,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    /// A 401 whose reason stays server-side; the body is always `Access Denied`.
    pub fn unauthorized<E>(reason: E) -> Self
    where
        E: Into<Error>,
    {
        Self::with_errors(
            StatusCode::UNAUTHORIZED,
            reason,
            vec![ACCESS_DENIED.to_string()],
        )
    }

    /// A 400 listing every field message in the order given.
    pub fn validation(messages: Vec<String>) -> Self {
        let summary = anyhow!("validation failed: {}", messages.join(", "));
        Self::with_errors(StatusCode::BAD_REQUEST, summary, messages)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = if self.status.is_server_error() {
            json!({
                "message": INTERNAL_ERROR_MESSAGE,
                "errors": self.errors,
            })
        } else {
            json!({
                "errors": self.errors,
            })
        };

        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorReport {
            status: self.status,
            detail: format!("{:#}", self.error),
        });
        response
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::internal(err)
    }
}
