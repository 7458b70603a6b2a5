use anyhow::{Context, Result};
use dotenv::dotenv;
use productos_api::{handler::AppRouter, state::AppState};
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::new("productos-api", config.otel_endpoint.clone());

    let logger_provider = telemetry
        .init_logger()
        .context("Failed to initialize log exporter")?;
    let tracer_provider = telemetry
        .init_tracer()
        .context("Failed to initialize span exporter")?;

    let _log_guard = init_logger(
        &logger_provider,
        "productos-api",
        config.dev_mode,
        config.enable_file_log,
    )?;

    let state = AppState::new().await;

    info!(port = config.port, "Starting productos-api");

    AppRouter::serve(config.port, config.body_limit_bytes, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Telemetry::shutdown(tracer_provider, logger_provider)?;

    Ok(())
}
