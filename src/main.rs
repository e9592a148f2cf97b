// src/main.rs
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use formguard::api::build_app;
use formguard::common::config::print_config_status;
use formguard::common::{AppState, ServiceConfig};
use formguard::services::{MonitoringConfig, MonitoringService};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = ServiceConfig::from_env();
    print_config_status(&config);

    // ========================================================================
    // ERROR REPORTING
    // ========================================================================

    // Sentry guard must outlive the server
    let monitoring = MonitoringService::new(MonitoringConfig::from_env());
    info!(
        reporting = monitoring.is_reporting(),
        environment = %monitoring.config().environment,
        "MonitoringService initialized"
    );

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = config.socket_addr();
    let app = build_app(AppState::new(config));

    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
