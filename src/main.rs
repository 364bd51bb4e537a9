//! Calculation service binary.
//!
//! Reads configuration from the YAML file named by `CALC_CONFIG` (if set)
//! plus `CALC_*` overrides, then serves the API until Ctrl-C.

use calc_engine::api::{AppState, create_router};
use calc_engine::config::ConfigLoader;
use calc_engine::telemetry::{SERVER_FILTER, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(SERVER_FILTER);

    let config = ConfigLoader::discover()?.into_config();

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Calculation service listening");

    let router = create_router(AppState::new(config));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Calculation service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
