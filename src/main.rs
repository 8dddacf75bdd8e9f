use entity_api::repository::InMemory;
use log::{error, info};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();

    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to initialize logger: {e}");
        std::process::exit(1);
    }

    if config.is_missing_signing_secret() {
        error!("SIGNING_SECRET must be set when request validation is enabled");
        std::process::exit(1);
    }

    info!(
        "Starting resourceful (signature version {}, validation {})",
        config.api_version(),
        if config.with_validation { "on" } else { "off" }
    );

    let app_state = match web::AppState::new(config, Arc::new(InMemory::new())) {
        Ok(app_state) => app_state,
        Err(e) => {
            error!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
