use crate::core::queries;
use crate::core::response::{connection_nodes, object_field, string_field};
use crate::domain::model::{DeploymentTriggerRequest, DeploymentTriggerResponse};
use crate::domain::ports::GraphQLGateway;
use crate::utils::error::{OpsError, Result};
use serde_json::{json, Value};

pub const NO_DEPLOYMENTS: &str = "No deployments found for this service";

/// Id of the most recent deployment, in the upstream's own ordering.
pub async fn latest_deployment_id<G>(gateway: &G, request: &DeploymentTriggerRequest) -> Result<String>
where
    G: GraphQLGateway + ?Sized,
{
    let variables = json!({
        "first": 1,
        "input": {
            "projectId": request.project_id,
            "serviceId": request.service_id,
            "environmentId": request.environment_id,
        }
    });

    let data = gateway
        .execute(queries::LATEST_DEPLOYMENT, Some(variables))
        .await?;

    let deployments = object_field(&data, "deployments")?;
    let nodes = connection_nodes(deployments)?;

    match nodes.first() {
        Some(node) => string_field(node, "id"),
        None => Err(OpsError::NotFound {
            message: NO_DEPLOYMENTS.to_string(),
        }),
    }
}

/// Restart the latest deployment of a service.
pub async fn trigger_deployment<G>(
    gateway: &G,
    request: &DeploymentTriggerRequest,
) -> Result<DeploymentTriggerResponse>
where
    G: GraphQLGateway + ?Sized,
{
    tracing::info!("Triggering deployment for service: {}", request.service_id);

    let deployment_id = latest_deployment_id(gateway, request).await?;

    let data = gateway
        .execute(
            queries::DEPLOYMENT_RESTART,
            Some(json!({ "deploymentId": deployment_id })),
        )
        .await?;

    let restarted = data
        .get("deploymentRestart")
        .cloned()
        .ok_or_else(|| OpsError::unexpected("missing 'deploymentRestart' in response"))?;

    tracing::info!("Deployment restarted: {}", deployment_id);

    Ok(DeploymentTriggerResponse {
        success: true,
        deployment_id,
        restarted,
    })
}
