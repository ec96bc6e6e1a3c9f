//! User domain models and DTOs.
//!
//! [`Identity`] is the stored user record, password hash included. It does not
//! implement `Serialize`, so it can never be written into a response body;
//! handlers convert it to [`PublicUser`] first.

use crate::ids::UserId;
use crate::validation::ValidatedInput;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// A user as stored, resolved by the authentication gate.
#[derive(FromRow, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl Identity {
    pub fn public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

/// The public projection of a user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<&Identity> for PublicUser {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            email_address: identity.email_address.clone(),
        }
    }
}

impl From<Identity> for PublicUser {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            first_name: identity.first_name,
            last_name: identity.last_name,
            email_address: identity.email_address,
        }
    }
}

/// Body of a registration request.
///
/// Every field is optional at the serde level so a missing field surfaces as
/// a validation message instead of a deserialization error.
#[derive(Deserialize, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(
        required(message = "First name is required"),
        length(min = 1, message = "Please provide a first name")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Last name is required"),
        length(min = 1, message = "Please provide a last name")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "Email address is required"),
        length(min = 1, message = "Please provide an email address"),
        email(message = "Please provide a valid email address")
    )]
    pub email_address: Option<String>,
    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Please provide a password")
    )]
    pub password: Option<String>,
}

impl NewUser {
    /// Trims surrounding whitespace from names and the email address.
    /// The password is kept exactly as sent.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.map(|s| s.trim().to_string()),
            last_name: self.last_name.map(|s| s.trim().to_string()),
            email_address: self.email_address.map(|s| s.trim().to_string()),
            password: self.password,
        }
    }
}

impl ValidatedInput for NewUser {
    const FIELD_ORDER: &'static [&'static str] =
        &["first_name", "last_name", "email_address", "password"];
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: UserId::new(7),
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        }
    }

    #[test]
    fn test_public_projection_excludes_hash() {
        let json = serde_json::to_value(identity().public()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "firstName": "Joe",
                "lastName": "Smith",
                "emailAddress": "joe@smith.com",
            })
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", identity());
        assert!(!debug.contains("$2b$"));

        let input = NewUser {
            password: Some("hunter2".to_string()),
            ..NewUser::default()
        };
        assert!(!format!("{:?}", input).contains("hunter2"));
    }

    #[test]
    fn test_missing_fields_report_in_order() {
        assert_eq!(
            NewUser::default().validation_messages(),
            vec![
                "First name is required",
                "Last name is required",
                "Email address is required",
                "Password is required",
            ]
        );
    }

    #[test]
    fn test_invalid_email_and_blank_names() {
        let input = NewUser {
            first_name: Some("  ".to_string()),
            last_name: Some("Smith".to_string()),
            email_address: Some("not-an-email".to_string()),
            password: Some("password".to_string()),
        }
        .normalized();

        assert_eq!(
            input.validation_messages(),
            vec![
                "Please provide a first name",
                "Please provide a valid email address",
            ]
        );
    }

    #[test]
    fn test_valid_input() {
        let input: NewUser = serde_json::from_value(serde_json::json!({
            "firstName": "Sally",
            "lastName": "Jones",
            "emailAddress": "sally@jones.com",
            "password": "password",
        }))
        .unwrap();

        assert!(input.validation_messages().is_empty());
    }
}
