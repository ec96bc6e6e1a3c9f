//! # Courseware Models
//!
//! Domain models and DTOs for the Courseware API.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed entity ids
//! - [`users`]: The stored [`Identity`] and its only serializable view, [`PublicUser`]
//! - [`courses`]: Courses, courses with their owner, and course input
//! - [`validation`]: Ordered collection of field validation messages
//!
//! # Example
//!
//! ```ignore
//! use courseware_models::{CourseInput, ValidatedInput};
//!
//! let input = CourseInput::default();
//! assert_eq!(
//!     input.validation_messages(),
//!     vec!["Title cannot be null", "Description cannot be null"],
//! );
//! ```

pub mod courses;
pub mod ids;
pub mod users;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use courses::{Course, CourseInput, CourseWithOwner};
pub use ids::{CourseId, UserId};
pub use users::{Identity, NewUser, PublicUser};
pub use validation::{ValidatedInput, ordered_messages};
