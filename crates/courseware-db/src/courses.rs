use courseware_core::StoreResult;
use courseware_models::{Course, CourseId, CourseInput, CourseWithOwner, PublicUser, UserId};
use sqlx::{FromRow, SqlitePool};
use tracing::instrument;

use crate::error::{classify, validate};

const SELECT_WITH_OWNER: &str = r#"
    SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed, c.user_id,
           u.first_name AS owner_first_name,
           u.last_name AS owner_last_name,
           u.email_address AS owner_email_address
    FROM courses c
    JOIN users u ON u.id = c.user_id
"#;

/// Course joined with the owner's public columns. The owner's password is
/// never selected.
#[derive(FromRow)]
struct CourseOwnerRow {
    id: CourseId,
    title: String,
    description: String,
    estimated_time: Option<String>,
    materials_needed: Option<String>,
    user_id: UserId,
    owner_first_name: String,
    owner_last_name: String,
    owner_email_address: String,
}

impl From<CourseOwnerRow> for CourseWithOwner {
    fn from(row: CourseOwnerRow) -> Self {
        Self {
            owner: PublicUser {
                id: row.user_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email_address: row.owner_email_address,
            },
            course: Course {
                id: row.id,
                title: row.title,
                description: row.description,
                estimated_time: row.estimated_time,
                materials_needed: row.materials_needed,
                user_id: row.user_id,
            },
        }
    }
}

pub struct CourseStore;

impl CourseStore {
    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool) -> StoreResult<Vec<CourseWithOwner>> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!("{SELECT_WITH_OWNER} ORDER BY c.id"))
            .fetch_all(db)
            .await
            .map_err(|e| classify(e, "Failed to fetch courses"))?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn find(db: &SqlitePool, id: CourseId) -> StoreResult<Option<Course>> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, estimated_time, materials_needed, user_id
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| classify(e, "Failed to fetch course by ID"))
    }

    #[instrument(skip(db))]
    pub async fn find_with_owner(
        db: &SqlitePool,
        id: CourseId,
    ) -> StoreResult<Option<CourseWithOwner>> {
        let row = sqlx::query_as::<_, CourseOwnerRow>(&format!("{SELECT_WITH_OWNER} WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| classify(e, "Failed to fetch course with owner"))?;

        Ok(row.map(CourseWithOwner::from))
    }

    #[instrument(skip(db, input))]
    pub async fn create(db: &SqlitePool, owner: UserId, input: CourseInput) -> StoreResult<Course> {
        let input = input.normalized();
        validate(&input)?;

        sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, estimated_time, materials_needed, user_id
            "#,
        )
        .bind(input.title.as_deref().unwrap_or_default())
        .bind(input.description.as_deref().unwrap_or_default())
        .bind(input.estimated_time.as_deref())
        .bind(input.materials_needed.as_deref())
        .bind(owner)
        .fetch_one(db)
        .await
        .map_err(|e| classify(e, "Failed to insert course"))
    }

    /// Replaces the editable fields. Returns `None` if the course is gone.
    #[instrument(skip(db, input))]
    pub async fn update(
        db: &SqlitePool,
        id: CourseId,
        input: CourseInput,
    ) -> StoreResult<Option<Course>> {
        let input = input.normalized();
        validate(&input)?;

        sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET title = ?, description = ?, estimated_time = ?, materials_needed = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, title, description, estimated_time, materials_needed, user_id
            "#,
        )
        .bind(input.title.as_deref().unwrap_or_default())
        .bind(input.description.as_deref().unwrap_or_default())
        .bind(input.estimated_time.as_deref())
        .bind(input.materials_needed.as_deref())
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| classify(e, "Failed to update course"))
    }

    /// Returns whether a row was deleted.
    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: CourseId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| classify(e, "Failed to delete course"))?;

        Ok(result.rows_affected() > 0)
    }
}
