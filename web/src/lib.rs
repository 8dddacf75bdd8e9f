use std::sync::Arc;

use domain::error::Error as DomainError;
use domain::gateway::slack::Notifier;
use domain::verification::{self, HmacRequestVerifier};
use domain::Repository;
use log::*;
use service::config::Config;
use tokio::net::TcpListener;

mod controller;
mod error;
mod middleware;
mod params;
mod response;
pub mod router;

pub use error::{Error, Result};

// Shared by every request handler.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: Arc<dyn Repository>,
    pub verifier: Arc<HmacRequestVerifier>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(
        config: Config,
        repository: Arc<dyn Repository>,
    ) -> core::result::Result<Self, DomainError> {
        let verifier = Arc::new(verification::verifier(&config));
        let notifier = Notifier::new(&config)?;

        Ok(Self {
            config,
            repository,
            verifier,
            notifier,
        })
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = app_state.config.port;

    let listener = TcpListener::bind((interface.as_str(), port)).await?;
    info!("Server starting... listening for connections on http://{interface}:{port}");

    if !app_state.config.with_validation {
        warn!("Request signature validation is disabled, every inbound command is trusted");
    }

    axum::serve(listener, router::define_routes(app_state)).await
}
