use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::handlers;
use crate::domain::ports::GraphQLGateway;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn GraphQLGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn GraphQLGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &dyn GraphQLGateway {
        self.gateway.as_ref()
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/services/create", post(handlers::create_service))
        .route("/services/{service_id}/status", get(handlers::service_status))
        .route("/variables/set", post(handlers::set_variables))
        .route("/deployments/trigger", post(handlers::trigger_deployment))
        .route("/utils/generate-secret", get(handlers::generate_secret))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
