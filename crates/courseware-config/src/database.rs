use std::env;

/// SQLite connection settings.
///
/// `DATABASE_URL` accepts any SQLx SQLite URL, e.g. `sqlite://courseware.db?mode=rwc`
/// or `sqlite::memory:`.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://courseware.db?mode=rwc".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
        }
    }
}
