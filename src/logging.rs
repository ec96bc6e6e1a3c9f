use anyhow::Context;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use courseware_config::LoggingConfig;
use courseware_core::ErrorReport;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs every request and its outcome. This is the single place where 5xx
/// detail is written out, and only when global error logging is enabled.
pub async fn logging_middleware(
    State(config): State<LoggingConfig>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Server error"
            );

            if config.enable_global_error_logging {
                if let Some(report) = response.extensions().get::<ErrorReport>() {
                    error!(
                        request_id = %request_id,
                        status = %report.status.as_u16(),
                        detail = %report.detail,
                        "Global error handler"
                    );
                }
            }
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }

    response
}

fn default_filter(config: &LoggingConfig) -> EnvFilter {
    let level = if config.log_level.trim().is_empty() {
        "info"
    } else {
        config.log_level.trim()
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "courseware={level},courseware_auth={level},courseware_db={level},tower_http=warn,sqlx=warn"
        ))
    })
}

/// Console logging, plus daily-rolling text (errors) and JSON files when
/// `LOG_DIR` is set.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(default_filter(config));

    let (file_layer, json_layer) = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory {log_dir}"))?;

            let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "courseware.log");
            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_filter(EnvFilter::new("error"));

            let json_appender =
                RollingFileAppender::new(Rotation::DAILY, log_dir, "courseware.json");
            let json_layer = fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(default_filter(config));

            (Some(file_layer), Some(json_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to initialize tracing")?;

    info!(log_dir = ?config.log_dir, "Tracing initialized");

    Ok(())
}
