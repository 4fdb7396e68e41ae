//! API Gateway Library
//!
//! HTTP surface for the user store and the login placeholder. Both services
//! run in-process; the gateway owns their only instances.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tracing::info;

use common::{AppError, AppResult};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Wire up services and build the router.
pub fn build_app(config: &GatewayConfig) -> Router {
    let user_service = user_service_lib::build_service(&config.users);
    let auth_service = auth_service_lib::build_service();

    let state = AppState::new(user_service, auth_service);
    create_router(state, config)
}

/// Run the HTTP server with the given configuration.
///
/// Bind and serve failures surface as [`AppError::Internal`].
pub async fn run_server(config: GatewayConfig) -> AppResult<()> {
    let bind_address = config.server.bind_address();
    let addr: SocketAddr = bind_address
        .parse()
        .map_err(|e| AppError::internal(format!("invalid bind address '{bind_address}': {e}")))?;

    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("failed to bind {addr}: {e}")))?;
    info!(
        "{} listening on {} (api prefix '{}')",
        config.server.service_name, addr, config.api_prefix
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))?;

    Ok(())
}
