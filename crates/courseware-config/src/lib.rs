//! # Courseware Config
//!
//! Configuration types for the Courseware API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: SQLite connection settings
//! - [`logging`]: Log level, log directory, and global error logging
//! - [`security`]: Password hashing cost
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use courseware_config::{CorsConfig, DatabaseConfig, ServerConfig};
//!
//! // Load configs from environment
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod logging;
pub mod security;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;

pub(crate) fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}
