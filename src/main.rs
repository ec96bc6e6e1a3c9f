use anyhow::Context;
use courseware::logging::init_tracing;
use courseware::router::init_router;
use courseware::state::init_app_state;
use courseware_config::{LoggingConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let logging_config = LoggingConfig::from_env();
    init_tracing(&logging_config)?;

    let state = init_app_state(logging_config).await?;
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(address = %address, "Server listening");
    println!("🚀 Server running on http://{}", address);
    println!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
