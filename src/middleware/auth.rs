use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use courseware_auth::AuthGate;
use courseware_core::AppError;
use courseware_models::{Identity, UserId};

use crate::state::AppState;

/// Extractor that authenticates the request with Basic credentials and
/// provides the caller's identity for this request only.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn user_id(&self) -> UserId {
        self.0.id
    }

    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let identity = AuthGate::authenticate(&state.db, auth_header)
            .await?
            .into_result()?;

        Ok(AuthUser(identity))
    }
}
