use crate::modules::users::controller::{create_user, get_current_user};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", get(get_current_user).post(create_user))
}
