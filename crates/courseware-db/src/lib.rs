//! # Courseware DB
//!
//! Database pool and stores for the Courseware API.
//!
//! This crate owns everything that talks to SQLite:
//!
//! - pool initialization with the schema applied at startup ([`init_db_pool`])
//! - [`UserStore`] and [`CourseStore`], whose operations return
//!   [`StoreResult`](courseware_core::StoreResult) so failures arrive as a
//!   closed set of kinds
//!
//! # Example
//!
//! ```ignore
//! use courseware_config::DatabaseConfig;
//! use courseware_db::{CourseStore, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! let courses = CourseStore::list(&pool).await?;
//! ```

mod error;

pub mod courses;
pub mod users;

use std::str::FromStr;

use anyhow::Context;
use courseware_config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use courses::CourseStore;
pub use users::UserStore;

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

/// Schema applied on every startup; already-applied steps are skipped.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the pool described by `config` and brings the schema up to date.
///
/// An in-memory URL gets a single long-lived connection, since every SQLite
/// memory connection is its own database.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    if config.url.contains(":memory:") {
        return init_memory_pool().await;
    }

    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sync_schema(&pool).await?;

    tracing::info!(url = %config.url, "Database connection established");

    Ok(pool)
}

/// A private in-memory database with the schema applied.
pub async fn init_memory_pool() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .context("Invalid in-memory database URL")?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to open in-memory database")?;

    sync_schema(&pool).await?;

    Ok(pool)
}

async fn sync_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to synchronize database schema")
}
