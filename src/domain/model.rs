use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status marker attached to freshly created services.
pub const STATUS_CREATED: &str = "created";
/// Status reported by the status endpoint; not derived from deployment state.
pub const STATUS_ACTIVE: &str = "active";
/// Name used when the upstream omits a created service's name.
pub const UNNAMED_SERVICE: &str = "unnamed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreateRequest {
    pub project_id: String,
    /// GitHub repository as `owner/repo`.
    pub repo: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub root_directory: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableSetRequest {
    pub project_id: String,
    pub service_id: String,
    /// Resolved from the project's environments when absent.
    #[serde(default)]
    pub environment_id: Option<String>,
    /// Kept in the order the client sent them.
    pub variables: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentTriggerRequest {
    pub project_id: String,
    pub service_id: String,
    #[serde(default)]
    pub environment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableResponse {
    pub success: bool,
    pub variables_set: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentTriggerResponse {
    pub success: bool,
    pub deployment_id: String,
    /// Restart acknowledgement exactly as the upstream returned it.
    pub restarted: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub service_id: String,
    pub name: String,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretResponse {
    pub secret_key: String,
    pub length: usize,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// One `{id, name}` entry from a project's environment list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
}
