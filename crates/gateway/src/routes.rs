//! Route configuration.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::handlers::{auth_routes, health_routes, user_routes};
use crate::openapi::api_doc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, config: &GatewayConfig) -> Router {
    let api = Router::new()
        .merge(health_routes())
        .nest("/usuarios", user_routes())
        .nest("/auth", auth_routes());

    let prefix = config.api_prefix.as_str();
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    let router = router
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url(format!("{prefix}/api-docs/openapi.json"), api_doc(prefix)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
