use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Executes GraphQL documents against the upstream deployment platform.
///
/// Implementations unwrap the response envelope: a non-empty `errors` list
/// is a failure even when `data` is also present, and a missing `data`
/// field yields an empty map.
#[async_trait]
pub trait GraphQLGateway: Send + Sync {
    async fn execute(&self, document: &str, variables: Option<Value>) -> Result<Map<String, Value>>;
}

pub trait UpstreamSettings: Send + Sync {
    fn api_url(&self) -> &str;
    fn token(&self) -> &str;
}
