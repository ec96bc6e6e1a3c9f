use crate::docs::ErrorResponse;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use courseware_core::AppError;
use courseware_models::{NewUser, PublicUser};
use tracing::{info, instrument};

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The authenticated user", body = PublicUser),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_current_user(auth_user: AuthUser) -> Json<PublicUser> {
    Json(auth_user.identity().public())
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", headers(("Location" = String, description = "Always `/api/users`"))),
        (status = 400, description = "Validation error or email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, input))]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user =
        UserService::create_user(&state.db, input, state.security_config.bcrypt_cost).await?;

    info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, [(header::LOCATION, "/api/users")]))
}
