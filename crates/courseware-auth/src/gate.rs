//! The per-request authentication decision.
//!
//! 1. Parse credentials from the `Authorization` header.
//! 2. Reject an empty email.
//! 3. Look the user up by exact email.
//! 4. Verify the password against the stored bcrypt hash.
//!
//! Bad input always yields [`AuthOutcome::Denied`]. Only store or verifier
//! failures produce an `Err`, which callers render as a 500.

use courseware_core::AppError;
use courseware_core::password::verify_password_blocking;
use courseware_db::{SqlitePool, UserStore};
use courseware_models::Identity;
use tracing::{debug, instrument, warn};

use crate::credentials::extract_credentials;

/// Why a request was not authenticated. Logged, never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DenialReason {
    #[error("Auth header not found")]
    MissingCredentials,
    #[error("Must enter an email address")]
    MissingEmail,
    #[error("{0} is not a user email address")]
    UnknownEmail(String),
    #[error("Incorrect password for email: {0}")]
    IncorrectPassword(String),
}

#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated(Identity),
    Denied(DenialReason),
}

impl AuthOutcome {
    /// The identity, or a 401 carrying the denial reason for the server log.
    pub fn into_result(self) -> Result<Identity, AppError> {
        match self {
            AuthOutcome::Authenticated(identity) => Ok(identity),
            AuthOutcome::Denied(reason) => Err(AppError::unauthorized(reason)),
        }
    }
}

pub struct AuthGate;

impl AuthGate {
    #[instrument(skip_all)]
    pub async fn authenticate(
        db: &SqlitePool,
        authorization: Option<&str>,
    ) -> Result<AuthOutcome, AppError> {
        let Some(credentials) = extract_credentials(authorization) else {
            return Ok(deny(DenialReason::MissingCredentials));
        };

        if credentials.email.is_empty() {
            return Ok(deny(DenialReason::MissingEmail));
        }

        let Some(identity) = UserStore::find_by_email(db, &credentials.email).await? else {
            return Ok(deny(DenialReason::UnknownEmail(credentials.email)));
        };

        let matches =
            verify_password_blocking(credentials.password, identity.password_hash.clone()).await?;

        if !matches {
            return Ok(deny(DenialReason::IncorrectPassword(credentials.email)));
        }

        debug!(user_id = %identity.id, "Request authenticated");

        Ok(AuthOutcome::Authenticated(identity))
    }
}

fn deny(reason: DenialReason) -> AuthOutcome {
    warn!(reason = %reason, "Authentication denied");
    AuthOutcome::Denied(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use courseware_db::init_memory_pool;
    use courseware_models::NewUser;

    fn basic(email: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
    }

    async fn pool_with_user() -> SqlitePool {
        let pool = init_memory_pool().await.unwrap();
        let input = NewUser {
            first_name: Some("Joe".to_string()),
            last_name: Some("Smith".to_string()),
            email_address: Some("joe@smith.com".to_string()),
            password: Some("password".to_string()),
        };
        UserStore::create(&pool, input, 4).await.unwrap();
        pool
    }

    async fn denial(pool: &SqlitePool, header: Option<&str>) -> DenialReason {
        match AuthGate::authenticate(pool, header).await.unwrap() {
            AuthOutcome::Denied(reason) => reason,
            AuthOutcome::Authenticated(identity) => {
                panic!("expected denial, authenticated {}", identity.email_address)
            }
        }
    }

    #[tokio::test]
    async fn test_correct_credentials_authenticate() {
        let pool = pool_with_user().await;
        let header = basic("joe@smith.com", "password");

        let outcome = AuthGate::authenticate(&pool, Some(&header)).await.unwrap();

        match outcome {
            AuthOutcome::Authenticated(identity) => {
                assert_eq!(identity.email_address, "joe@smith.com");
                assert_eq!(identity.first_name, "Joe");
            }
            AuthOutcome::Denied(reason) => panic!("unexpected denial: {reason}"),
        }
    }

    #[tokio::test]
    async fn test_missing_header() {
        let pool = pool_with_user().await;
        assert_eq!(denial(&pool, None).await, DenialReason::MissingCredentials);
        assert_eq!(
            denial(&pool, Some("Bearer token")).await,
            DenialReason::MissingCredentials
        );
    }

    #[tokio::test]
    async fn test_extra_separator_is_treated_as_missing_header() {
        let pool = pool_with_user().await;
        let header = basic("joe@smith.com", "pass:word");

        assert_eq!(
            denial(&pool, Some(&header)).await,
            DenialReason::MissingCredentials
        );
    }

    #[tokio::test]
    async fn test_empty_email() {
        let pool = pool_with_user().await;
        let header = basic("", "password");

        let reason = denial(&pool, Some(&header)).await;
        assert_eq!(reason, DenialReason::MissingEmail);
        assert_eq!(reason.to_string(), "Must enter an email address");
    }

    #[tokio::test]
    async fn test_unknown_email() {
        let pool = pool_with_user().await;
        let header = basic("nobody@smith.com", "password");

        let reason = denial(&pool, Some(&header)).await;
        assert_eq!(
            reason.to_string(),
            "nobody@smith.com is not a user email address"
        );
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let pool = pool_with_user().await;
        let header = basic("joe@smith.com", "wrong");

        let reason = denial(&pool, Some(&header)).await;
        assert_eq!(
            reason.to_string(),
            "Incorrect password for email: joe@smith.com"
        );
    }

    #[tokio::test]
    async fn test_denial_into_result_is_unauthorized() {
        let pool = pool_with_user().await;

        let err = AuthGate::authenticate(&pool, None)
            .await
            .unwrap()
            .into_result()
            .unwrap_err();

        assert_eq!(err.status.as_u16(), 401);
        assert_eq!(err.errors, vec!["Access Denied"]);
        assert_eq!(err.error.to_string(), "Auth header not found");
    }
}
