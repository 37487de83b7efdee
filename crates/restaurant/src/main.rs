use anyhow::{Context, Result};
use dotenv::dotenv;
use restaurant::{handler::AppRouter, state::AppState};
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = config
        .otel_endpoint
        .clone()
        .map(|endpoint| Telemetry::new("restaurant", endpoint));

    let logger_provider = match telemetry.as_mut() {
        Some(telemetry) => {
            telemetry.init_tracer()?;
            telemetry.init_meter()?;
            Some(telemetry.init_logger()?)
        }
        None => None,
    };

    let _log_guard = init_logger(
        logger_provider.as_ref(),
        "restaurant",
        config.is_dev,
        config.enable_file_log,
    )?;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            warn!("⚠️ {e}");
        }
    }

    Ok(())
}
