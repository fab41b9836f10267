//! Model Repository HTTP gateway.
//!
//! Exposes the persistence gateways of the model repository as a REST API
//! answering with response envelopes.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use model_repository_lib::config::ModelRepositoryConfig;
use model_repository_lib::service::{LoggingHook, PersistenceHook};

use crate::routes::create_router;
use crate::state::AppState;

/// Connect the configured storage backend and serve HTTP until shutdown.
pub async fn run_server(config: ModelRepositoryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let hooks: Vec<Arc<dyn PersistenceHook>> = vec![Arc::new(LoggingHook)];
    let (gateways, health) = model_repository_lib::connect(&config, &hooks).await?;

    // Create app state
    let state = AppState::new(gateways, health);

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
