use crate::docs::ErrorResponse;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use courseware_core::AppError;
use courseware_models::{CourseId, CourseInput, CourseWithOwner};
use tracing::{info, instrument};

/// List all courses with their owners
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses, ordered by id", body = Vec<CourseWithOwner>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Get a course and its owner
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = CourseWithOwner),
        (status = 400, description = "Invalid course id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<Json<CourseWithOwner>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    Ok(Json(course))
}

/// Create a course owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseInput,
    responses(
        (status = 201, description = "Course created", headers(("Location" = String, description = "Path of the new course"))),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, input), fields(user_id = %auth_user.user_id()))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiJson(input): ApiJson<CourseInput>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::create_course(&state.db, auth_user.identity(), input).await?;

    info!(course_id = %course.id, "Course created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/courses/{}", course.id))],
    ))
}

/// Replace a course's editable fields
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    request_body = CourseInput,
    responses(
        (status = 204, description = "Course updated"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - course owner only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, input), fields(user_id = %auth_user.user_id()))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<CourseId>,
    ApiJson(input): ApiJson<CourseInput>,
) -> Result<StatusCode, AppError> {
    CourseService::update_course(&state.db, auth_user.identity(), id, input).await?;

    info!(course_id = %id, "Course updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - course owner only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<StatusCode, AppError> {
    CourseService::delete_course(&state.db, auth_user.identity(), id).await?;

    info!(course_id = %id, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}
