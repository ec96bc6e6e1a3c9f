#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use courseware::router::init_router;
use courseware::state::AppState;
use courseware_config::security::MIN_BCRYPT_COST;
use courseware_config::{CorsConfig, LoggingConfig, SecurityConfig};
use courseware_db::{CourseStore, SqlitePool, UserStore, init_memory_pool};
use courseware_models::{Course, CourseInput, NewUser, UserId};
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "testpass123";

pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub password: String,
}

impl TestUser {
    pub fn auth_header(&self) -> String {
        basic_auth(&self.email, &self.password)
    }
}

/// A router over a fresh in-memory database.
pub async fn setup_test_app() -> (Router, SqlitePool) {
    let pool = init_memory_pool().await.unwrap();
    let state = AppState {
        db: pool.clone(),
        cors_config: CorsConfig::default(),
        security_config: SecurityConfig::with_cost(MIN_BCRYPT_COST),
        logging_config: LoggingConfig::default(),
    };
    (init_router(state), pool)
}

pub async fn create_test_user(pool: &SqlitePool, email: &str, password: &str) -> TestUser {
    let input = NewUser {
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        email_address: Some(email.to_string()),
        password: Some(password.to_string()),
    };
    let identity = UserStore::create(pool, input, MIN_BCRYPT_COST).await.unwrap();

    TestUser {
        id: identity.id,
        email: identity.email_address,
        password: password.to_string(),
    }
}

pub async fn create_test_course(pool: &SqlitePool, owner: UserId, title: &str) -> Course {
    let input = CourseInput {
        title: Some(title.to_string()),
        description: Some("Test course description".to_string()),
        estimated_time: Some("6 hours".to_string()),
        materials_needed: None,
    };
    CourseStore::create(pool, owner, input).await.unwrap()
}

pub fn basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    builder.body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
