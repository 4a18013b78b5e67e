//! GraphQL documents sent to the Railway API.

pub const SERVICE_CREATE: &str = r#"
mutation serviceCreate($input: ServiceCreateInput!) {
  serviceCreate(input: $input) {
    id
    name
    createdAt
  }
}
"#;

pub const PROJECT_ENVIRONMENTS: &str = r#"
query project($id: String!) {
  project(id: $id) {
    environments {
      edges {
        node {
          id
          name
        }
      }
    }
  }
}
"#;

pub const VARIABLE_UPSERT: &str = r#"
mutation variableUpsert($input: VariableUpsertInput!) {
  variableUpsert(input: $input)
}
"#;

pub const LATEST_DEPLOYMENT: &str = r#"
query deployments($first: Int, $input: DeploymentListInput!) {
  deployments(first: $first, input: $input) {
    edges {
      node {
        id
        status
        createdAt
        url
        canRedeploy
      }
    }
  }
}
"#;

pub const DEPLOYMENT_RESTART: &str = r#"
mutation deploymentRestart($deploymentId: String!) {
  deploymentRestart(id: $deploymentId)
}
"#;

pub const SERVICE_STATUS: &str = r#"
query service($id: String!) {
  service(id: $id) {
    id
    name
    createdAt
  }
}
"#;
