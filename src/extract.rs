//! Extractors whose rejections use the API error shape.
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies. These wrappers
//! turn every rejection into a 400 `{"errors":[...]}`.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use courseware_core::AppError;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let message = match rejection {
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header"
                    }
                    JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
                    JsonRejection::JsonDataError(_) => "Invalid field type in request",
                    _ => "Invalid request body",
                };
                AppError::bad_request(anyhow!(message))
            })?;

        Ok(ApiJson(value))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(anyhow!("Invalid path parameter: {}", rejection.body_text()))
            })?;

        Ok(ApiPath(value))
    }
}
