use crate::core::queries;
use crate::core::response::{connection_nodes, object_field, string_field};
use crate::domain::model::{Environment, VariableResponse, VariableSetRequest};
use crate::domain::ports::GraphQLGateway;
use crate::utils::error::Result;
use serde_json::{json, Value};

const PREFERRED_ENVIRONMENT: &str = "production";

/// Prefer an environment named "production" (any case), else the first one.
/// The slice is used in upstream order and never re-sorted.
pub fn select_environment(environments: &[Environment]) -> Option<&Environment> {
    environments
        .iter()
        .find(|env| env.name.eq_ignore_ascii_case(PREFERRED_ENVIRONMENT))
        .or_else(|| environments.first())
}

pub async fn list_environments<G>(gateway: &G, project_id: &str) -> Result<Vec<Environment>>
where
    G: GraphQLGateway + ?Sized,
{
    let data = gateway
        .execute(queries::PROJECT_ENVIRONMENTS, Some(json!({ "id": project_id })))
        .await?;

    let project = object_field(&data, "project")?;
    let environments = object_field(project, "environments")?;

    connection_nodes(environments)?
        .into_iter()
        .map(|node| -> Result<Environment> {
            Ok(Environment {
                id: string_field(node, "id")?,
                name: string_field(node, "name")?,
            })
        })
        .collect()
}

/// `Ok(None)` when the project has no environments at all.
pub async fn resolve_environment_id<G>(gateway: &G, project_id: &str) -> Result<Option<String>>
where
    G: GraphQLGateway + ?Sized,
{
    let environments = list_environments(gateway, project_id).await?;
    let selected = select_environment(&environments).map(|env| env.id.clone());

    match &selected {
        Some(id) => tracing::debug!("Resolved environment {} for project {}", id, project_id),
        None => tracing::warn!("Project {} has no environments", project_id),
    }

    Ok(selected)
}

async fn upsert_variable<G>(
    gateway: &G,
    request: &VariableSetRequest,
    environment_id: Option<&str>,
    name: &str,
    value: &str,
) -> std::result::Result<(), String>
where
    G: GraphQLGateway + ?Sized,
{
    let variables = json!({
        "input": {
            "projectId": request.project_id,
            "environmentId": environment_id,
            "serviceId": request.service_id,
            "name": name,
            "value": value,
        }
    });

    match gateway.execute(queries::VARIABLE_UPSERT, Some(variables)).await {
        Ok(data) if data.get("variableUpsert") == Some(&Value::Bool(true)) => Ok(()),
        Ok(_) => Err(format!("Failed to set {}: Unexpected response", name)),
        Err(e) => Err(format!("Failed to set {}: {}", name, e)),
    }
}

/// Upsert every variable in request order. Individual failures are
/// collected and never stop the remaining upserts.
pub async fn set_variables<G>(gateway: &G, request: &VariableSetRequest) -> VariableResponse
where
    G: GraphQLGateway + ?Sized,
{
    tracing::info!(
        "Setting {} variables for service: {}",
        request.variables.len(),
        request.service_id
    );

    let environment_id = match request.environment_id.as_deref().filter(|s| !s.is_empty()) {
        Some(id) => Some(id.to_string()),
        None => match resolve_environment_id(gateway, &request.project_id).await {
            Ok(id) => id,
            Err(e) => {
                let message = format!("Failed to get environment ID: {}", e);
                tracing::error!("{}", message);
                return VariableResponse {
                    success: false,
                    variables_set: Vec::new(),
                    errors: vec![message],
                };
            }
        },
    };

    let mut variables_set = Vec::new();
    let mut errors = Vec::new();

    for (name, value) in &request.variables {
        match upsert_variable(gateway, request, environment_id.as_deref(), name, value).await {
            Ok(()) => {
                tracing::info!("Successfully set variable: {}", name);
                variables_set.push(name.clone());
            }
            Err(message) => {
                tracing::error!("{}", message);
                errors.push(message);
            }
        }
    }

    VariableResponse {
        success: errors.is_empty(),
        variables_set,
        errors,
    }
}
