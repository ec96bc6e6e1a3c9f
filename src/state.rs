use anyhow::Result;
use courseware_config::{CorsConfig, DatabaseConfig, LoggingConfig, SecurityConfig};
use courseware_db::{SqlitePool, init_db_pool};

/// Everything a request handler may depend on. Built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub cors_config: CorsConfig,
    pub security_config: SecurityConfig,
    pub logging_config: LoggingConfig,
}

pub async fn init_app_state(logging_config: LoggingConfig) -> Result<AppState> {
    Ok(AppState {
        db: init_db_pool(&DatabaseConfig::from_env()).await?,
        cors_config: CorsConfig::from_env(),
        security_config: SecurityConfig::from_env(),
        logging_config,
    })
}
