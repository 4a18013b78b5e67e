use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Railway API error: {message}")]
    UpstreamTransport { message: String },

    #[error("GraphQL errors: {}", format_graphql_errors(.errors))]
    UpstreamGraphQL { errors: Vec<Value> },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<reqwest::Error> for OpsError {
    fn from(err: reqwest::Error) -> Self {
        OpsError::UpstreamTransport {
            message: err.to_string(),
        }
    }
}

impl OpsError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        OpsError::UnexpectedResponse {
            message: message.into(),
        }
    }

    /// Status class of an error before any handler re-wraps it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            OpsError::UpstreamGraphQL { .. } => StatusCode::BAD_REQUEST,
            OpsError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn format_graphql_errors(errors: &[Value]) -> String {
    let messages: Vec<String> = errors
        .iter()
        .map(|e| match e.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => e.to_string(),
        })
        .collect();
    messages.join("; ")
}

pub type Result<T> = std::result::Result<T, OpsError>;

/// Failure of an inbound request, carrying the operation it happened in.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Service creation failed: {0}")]
    ServiceCreation(#[source] OpsError),

    #[error("Deployment trigger failed: {0}")]
    DeploymentTrigger(#[source] OpsError),

    #[error("Status query failed: {0}")]
    StatusQuery(#[source] OpsError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DeploymentTrigger(inner) if inner.status_code() == StatusCode::NOT_FOUND => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::DeploymentTrigger(inner @ OpsError::NotFound { .. }) => inner.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::warn!("Request failed with {}: {}", status, self);
        }
        let body = Json(serde_json::json!({ "detail": self.detail() }));
        (status, body).into_response()
    }
}
