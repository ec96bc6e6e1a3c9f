use std::env;

use crate::env_flag;

/// Logging settings.
///
/// - `LOG_LEVEL`: level for this application's targets (default `info`)
/// - `LOG_DIR`: when set, logs are also written to a daily-rolling file there
/// - `ENABLE_GLOBAL_ERROR_LOGGING`: log full detail of every 5xx response
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub enable_global_error_logging: bool,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR").ok().filter(|s| !s.trim().is_empty()),
            enable_global_error_logging: env_flag("ENABLE_GLOBAL_ERROR_LOGGING"),
        }
    }
}
