use anyhow::anyhow;
use courseware_core::AppError;
use courseware_models::{Course, Identity};
use tracing::warn;

pub const NOT_OWNER_MESSAGE: &str = "Only the course owner can modify this course";

/// Allows mutation only when `identity` created `course`.
pub fn ensure_owner(identity: &Identity, course: &Course) -> Result<(), AppError> {
    if course.is_owned_by(identity.id) {
        return Ok(());
    }

    warn!(
        user_id = %identity.id,
        course_id = %course.id,
        owner_id = %course.user_id,
        "Course mutation by non-owner rejected"
    );

    Err(AppError::forbidden(anyhow!(NOT_OWNER_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use courseware_models::{CourseId, UserId};

    fn identity(id: i64) -> Identity {
        Identity {
            id: UserId::new(id),
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn course(owner: i64) -> Course {
        Course {
            id: CourseId::new(1),
            title: "Build a Basic Bookcase".to_string(),
            description: "High-end furniture projects".to_string(),
            estimated_time: None,
            materials_needed: None,
            user_id: UserId::new(owner),
        }
    }

    #[test]
    fn test_owner_is_allowed() {
        assert!(ensure_owner(&identity(1), &course(1)).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(&identity(2), &course(1)).unwrap_err();

        assert_eq!(err.status.as_u16(), 403);
        assert_eq!(err.errors, vec![NOT_OWNER_MESSAGE]);
    }
}
