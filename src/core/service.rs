use crate::core::queries;
use crate::core::response::{object_field, string_field};
use crate::domain::model::{
    ServiceCreateRequest, ServiceResponse, ServiceStatusResponse, STATUS_ACTIVE, STATUS_CREATED,
    UNNAMED_SERVICE,
};
use crate::domain::ports::GraphQLGateway;
use crate::utils::error::Result;
use serde_json::{json, Map, Value};

/// Build the sparse `ServiceCreateInput`. Optional fields that were not
/// supplied (or are empty) are left out rather than sent as null.
pub fn build_service_input(request: &ServiceCreateRequest) -> Map<String, Value> {
    let mut input = Map::new();
    input.insert("projectId".to_string(), json!(request.project_id));
    input.insert("source".to_string(), json!({ "repo": request.repo }));

    if let Some(name) = request.service_name.as_deref().filter(|s| !s.is_empty()) {
        input.insert("name".to_string(), json!(name));
    }
    if let Some(root) = request.root_directory.as_deref().filter(|s| !s.is_empty()) {
        input.insert("rootDirectory".to_string(), json!(root));
    }

    input
}

pub async fn create_service<G>(gateway: &G, request: &ServiceCreateRequest) -> Result<ServiceResponse>
where
    G: GraphQLGateway + ?Sized,
{
    tracing::info!("Creating service for repo: {}", request.repo);

    let variables = json!({ "input": build_service_input(request) });
    let data = gateway
        .execute(queries::SERVICE_CREATE, Some(variables))
        .await?;

    let service = object_field(&data, "serviceCreate")?;
    let id = string_field(service, "id")?;
    let name = service
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(UNNAMED_SERVICE)
        .to_string();
    let created_at = string_field(service, "createdAt")?;

    tracing::info!("Service created successfully: {}", id);

    Ok(ServiceResponse {
        id,
        name,
        created_at,
        status: STATUS_CREATED.to_string(),
    })
}

pub async fn get_service_status<G>(gateway: &G, service_id: &str) -> Result<ServiceStatusResponse>
where
    G: GraphQLGateway + ?Sized,
{
    tracing::debug!("Fetching status for service: {}", service_id);

    let data = gateway
        .execute(queries::SERVICE_STATUS, Some(json!({ "id": service_id })))
        .await?;

    let service = object_field(&data, "service")?;

    Ok(ServiceStatusResponse {
        service_id: string_field(service, "id")?,
        name: string_field(service, "name")?,
        created_at: string_field(service, "createdAt")?,
        status: STATUS_ACTIVE.to_string(),
    })
}
