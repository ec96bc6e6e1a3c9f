//! # Courseware CLI
//!
//! Database seeding utilities for Courseware testing and development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use courseware_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_courses_per_user(3);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
