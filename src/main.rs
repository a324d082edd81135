//! # Wanderlust
//!
//! Travel planning backend.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Entity store (PostgreSQL pool or in-memory tables)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use wanderlust::config::Settings;
use wanderlust::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    wanderlust::telemetry::init_tracing();

    info!("Starting Wanderlust API...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = %settings.database.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Server stopped");
    Ok(())
}
