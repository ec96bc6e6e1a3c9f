//! Course models and DTOs.

use crate::ids::{CourseId, UserId};
use crate::users::PublicUser;
use crate::validation::ValidatedInput;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A course as stored. `user_id` is the owning user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: UserId,
}

impl Course {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// A course together with the public fields of its owner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseWithOwner {
    #[serde(flatten)]
    pub course: Course,
    pub owner: PublicUser,
}

/// Body of a course create or update request.
///
/// Updates replace all four fields. An owner id in the body is ignored; the
/// owner is always the authenticated user.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    #[validate(
        required(message = "Title cannot be null"),
        length(min = 1, message = "Please provide a Title")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Description cannot be null"),
        length(min = 1, message = "Please provide a Description")
    )]
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl CourseInput {
    /// Trims every field; blank optional fields become `None`.
    pub fn normalized(self) -> Self {
        let optional = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            title: self.title.map(|s| s.trim().to_string()),
            description: self.description.map(|s| s.trim().to_string()),
            estimated_time: optional(self.estimated_time),
            materials_needed: optional(self.materials_needed),
        }
    }
}

impl ValidatedInput for CourseInput {
    const FIELD_ORDER: &'static [&'static str] = &["title", "description"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_reports_both_required_fields() {
        let input: CourseInput = serde_json::from_value(json!({})).unwrap();

        assert_eq!(
            input.normalized().validation_messages(),
            vec!["Title cannot be null", "Description cannot be null"]
        );
    }

    #[test]
    fn test_blank_title_is_empty() {
        let input = CourseInput {
            title: Some("   ".to_string()),
            description: Some("Learn things".to_string()),
            ..CourseInput::default()
        }
        .normalized();

        assert_eq!(input.validation_messages(), vec!["Please provide a Title"]);
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let input = CourseInput {
            title: Some(" Build a Basic Bookcase ".to_string()),
            description: Some("High-end furniture projects".to_string()),
            estimated_time: Some(" ".to_string()),
            materials_needed: Some("* 1/2 x 3/4 inch parting strip\n".to_string()),
        }
        .normalized();

        assert_eq!(input.title.as_deref(), Some("Build a Basic Bookcase"));
        assert_eq!(input.estimated_time, None);
        assert_eq!(
            input.materials_needed.as_deref(),
            Some("* 1/2 x 3/4 inch parting strip")
        );
        assert!(input.validation_messages().is_empty());
    }

    #[test]
    fn test_body_owner_is_ignored() {
        let input: CourseInput = serde_json::from_value(json!({
            "title": "t",
            "description": "d",
            "userId": 99,
        }))
        .unwrap();

        assert!(input.validation_messages().is_empty());
    }

    #[test]
    fn test_course_with_owner_flattens() {
        let course = Course {
            id: CourseId::new(1),
            title: "t".to_string(),
            description: "d".to_string(),
            estimated_time: None,
            materials_needed: Some("m".to_string()),
            user_id: UserId::new(2),
        };
        let owner = PublicUser {
            id: UserId::new(2),
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
        };

        let json = serde_json::to_value(CourseWithOwner { course, owner }).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 2);
        assert_eq!(json["estimatedTime"], serde_json::Value::Null);
        assert_eq!(json["owner"]["emailAddress"], "joe@smith.com");
        assert!(json["owner"].get("password").is_none());
    }
}
