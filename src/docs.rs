use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use courseware_models::{Course, CourseInput, CourseWithOwner, NewUser, PublicUser};

/// Error body. Server errors also carry a generic `message`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::welcome,
        crate::modules::users::controller::get_current_user,
        crate::modules::users::controller::create_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            PublicUser,
            NewUser,
            Course,
            CourseWithOwner,
            CourseInput,
            ErrorResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User registration and the authenticated user"),
        (name = "Courses", description = "Course catalogue and owner-only mutation")
    ),
    info(
        title = "Courseware API",
        version = "0.1.0",
        description = "A REST API for users and the courses they own, built with Rust, Axum, and SQLite. Protected routes use HTTP Basic authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            )
        }
    }
}
