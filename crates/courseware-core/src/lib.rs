//! # Courseware Core
//!
//! Core types, errors, and utilities for the Courseware API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`store`]: The closed set of failures the persistence layer can report
//! - [`normalizer`]: Translation of store failures into API error shapes
//! - [`password`]: Secure password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use courseware_core::{AppError, StoreError, ValidationFailure};
//!
//! let failure = ValidationFailure::normalize(&StoreError::Validation(vec![
//!     "Please provide a Title".to_string(),
//! ]));
//! assert_eq!(failure.status, axum::http::StatusCode::BAD_REQUEST);
//!
//! let error: AppError = StoreError::Validation(vec![]).into(); // 500
//! ```

pub mod errors;
pub mod normalizer;
pub mod password;
pub mod store;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorReport};
pub use normalizer::ValidationFailure;
pub use password::{hash_password, verify_password};
pub use store::{StoreError, StoreResult};
