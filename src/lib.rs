//! # Courseware API
//!
//! A REST API built with Rust, Axum, and SQLite for users and the courses
//! they own.
//!
//! ## Overview
//!
//! - **Users**: anyone can register; an authenticated user can read their own
//!   public profile
//! - **Courses**: anyone can browse; only authenticated users can create, and
//!   only a course's owner can update or delete it
//! - **Authentication**: stateless HTTP Basic, verified against a bcrypt hash
//!   on every protected request
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor (runs the authentication gate)
//! ├── modules/          # Feature modules
//! │   ├── users/       # Registration and current user
//! │   └── courses/     # Course CRUD with ownership checks
//! ├── docs.rs           # OpenAPI document
//! ├── extract.rs        # JSON and path extractors with API-shaped rejections
//! ├── logging.rs        # Tracing setup and request logging middleware
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic over the stores in `courseware-db`
//! - `router.rs`: Axum router configuration
//!
//! Domain types live in `courseware-models`, errors and password hashing in
//! `courseware-core`, and the authentication gate in `courseware-auth`.
//!
//! ## Error Responses
//!
//! | Status | Body |
//! |--------|------|
//! | 400 | `{"errors":[...]}` field messages in declared field order |
//! | 401 | `{"errors":["Access Denied"]}` |
//! | 403 | `{"errors":["Only the course owner can modify this course"]}` |
//! | 404 | `{"errors":["Course not found"]}`, or `{"message":"Route Not Found"}` for unknown paths |
//! | 500 | `{"message":"An unexpected error occurred","errors":[]}` |
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://courseware.db?mode=rwc
//! PORT=5000
//! ENABLE_GLOBAL_ERROR_LOGGING=true
//! ```
//!
//! The schema is created on startup. Seed development data with:
//!
//! ```bash
//! cargo run --bin courseware-cli -- seed --users 10 --courses 2
//! ```
//!
//! API documentation is served at `/scalar` and `/api-docs/openapi.json`.

pub mod docs;
pub mod extract;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use courseware_auth;
pub use courseware_config;
pub use courseware_core;
pub use courseware_db;
pub use courseware_models;
