use anyhow::anyhow;
use courseware_auth::ensure_owner;
use courseware_core::AppError;
use courseware_db::{CourseStore, SqlitePool};
use courseware_models::{Course, CourseId, CourseInput, CourseWithOwner, Identity};
use tracing::instrument;

fn course_not_found() -> AppError {
    AppError::not_found(anyhow!("Course not found"))
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_courses(db: &SqlitePool) -> Result<Vec<CourseWithOwner>, AppError> {
        Ok(CourseStore::list(db).await?)
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &SqlitePool, id: CourseId) -> Result<CourseWithOwner, AppError> {
        CourseStore::find_with_owner(db, id)
            .await?
            .ok_or_else(course_not_found)
    }

    /// The owner is always `owner`, whatever the body says.
    #[instrument(skip(db, owner, input), fields(owner_id = %owner.id))]
    pub async fn create_course(
        db: &SqlitePool,
        owner: &Identity,
        input: CourseInput,
    ) -> Result<Course, AppError> {
        Ok(CourseStore::create(db, owner.id, input).await?)
    }

    #[instrument(skip(db, identity, input), fields(user_id = %identity.id))]
    pub async fn update_course(
        db: &SqlitePool,
        identity: &Identity,
        id: CourseId,
        input: CourseInput,
    ) -> Result<Course, AppError> {
        let course = Self::find_for_mutation(db, identity, id).await?;

        CourseStore::update(db, course.id, input)
            .await?
            .ok_or_else(course_not_found)
    }

    #[instrument(skip(db, identity), fields(user_id = %identity.id))]
    pub async fn delete_course(
        db: &SqlitePool,
        identity: &Identity,
        id: CourseId,
    ) -> Result<(), AppError> {
        let course = Self::find_for_mutation(db, identity, id).await?;

        if !CourseStore::delete(db, course.id).await? {
            return Err(course_not_found());
        }

        Ok(())
    }

    /// 404 if the course is missing, then 403 if `identity` does not own it.
    async fn find_for_mutation(
        db: &SqlitePool,
        identity: &Identity,
        id: CourseId,
    ) -> Result<Course, AppError> {
        let course = CourseStore::find(db, id).await?.ok_or_else(course_not_found)?;
        ensure_owner(identity, &course)?;
        Ok(course)
    }
}
