//! Axum handlers for the proxy's REST surface.

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::{SecondsFormat, Utc};

use crate::app::routes::AppState;
use crate::core::{deployment, secret, service, variables};
use crate::domain::model::{
    DeploymentTriggerRequest, DeploymentTriggerResponse, HealthResponse, SecretResponse,
    ServiceCreateRequest, ServiceResponse, ServiceStatusResponse, VariableResponse,
    VariableSetRequest,
};
use crate::utils::error::ApiError;

pub const SERVICE_NAME: &str = "Railway Operations Service";

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<ServiceCreateRequest>,
) -> Result<Json<ServiceResponse>, ApiError> {
    service::create_service(state.gateway(), &request)
        .await
        .map(Json)
        .map_err(ApiError::ServiceCreation)
}

/// Always answers 200 once the request is accepted; per-variable failures
/// are reported in the body.
pub async fn set_variables(
    State(state): State<AppState>,
    Json(request): Json<VariableSetRequest>,
) -> Json<VariableResponse> {
    Json(variables::set_variables(state.gateway(), &request).await)
}

pub async fn trigger_deployment(
    State(state): State<AppState>,
    Json(request): Json<DeploymentTriggerRequest>,
) -> Result<Json<DeploymentTriggerResponse>, ApiError> {
    deployment::trigger_deployment(state.gateway(), &request)
        .await
        .map(Json)
        .map_err(ApiError::DeploymentTrigger)
}

pub async fn service_status(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<ServiceStatusResponse>, ApiError> {
    service::get_service_status(state.gateway(), &service_id)
        .await
        .map(Json)
        .map_err(ApiError::StatusQuery)
}

pub async fn generate_secret() -> Json<SecretResponse> {
    Json(secret::generate_secret())
}
