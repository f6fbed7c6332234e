//! Main entry point for the Bykorp agency API server.

use bykorp_server::{
    model::{AppState, Configuration},
    startup,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;

    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    let persistence = startup::init_persistence(&configuration).await?;

    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let storage_mode = persistence.storage_mode();

    let app_state = AppState::new(configuration, persistence.clone());
    if app_state.admin_token.is_none() {
        info!("No admin token configured, GET /api/reservations is open");
    }

    let server = startup::main_server(app_state, server_address.clone(), server_port)?;
    let shutdown_listener = startup::spawn_shutdown_listener(server.handle());

    info!(
        storage = %storage_mode,
        "Bykorp API server listening on http://{}:{}",
        server_address,
        server_port
    );

    let result = server.await;
    shutdown_listener.abort();

    if let Err(e) = persistence.shutdown().await {
        error!("Failed to close {} storage: {:#}", storage_mode, e);
    }

    if let Err(e) = result {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Bykorp server shutdown complete");
    Ok(())
}
