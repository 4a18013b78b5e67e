use crate::domain::ports::{GraphQLGateway, UpstreamSettings};
use crate::utils::error::{OpsError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GraphQL request body. `variables` is left out entirely when absent.
#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

/// reqwest-backed client for the Railway GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct RailwayClient {
    client: Client,
    api_url: String,
}

impl RailwayClient {
    pub fn new<S: UpstreamSettings + ?Sized>(settings: &S) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token())).map_err(
            |_| OpsError::InvalidConfigValueError {
                field: "token".to_string(),
                value: "<redacted>".to_string(),
                reason: "Token contains characters not allowed in an HTTP header".to_string(),
            },
        )?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| OpsError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_url: settings.api_url().to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl GraphQLGateway for RailwayClient {
    async fn execute(&self, document: &str, variables: Option<Value>) -> Result<Map<String, Value>> {
        tracing::debug!("Making GraphQL request to: {}", self.api_url);

        let body = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::error!("Railway API request failed: {}", e);
                OpsError::from(e)
            })?;

        tracing::debug!("GraphQL response status: {}", response.status());

        let envelope: GraphQLResponse = response.json().await.map_err(|e| {
            tracing::error!("Railway API returned an undecodable body: {}", e);
            OpsError::from(e)
        })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            tracing::error!("GraphQL errors: {}", serde_json::Value::Array(errors.clone()));
            return Err(OpsError::UpstreamGraphQL { errors });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    struct MockSettings {
        api_url: String,
        token: String,
    }

    impl MockSettings {
        fn new(api_url: String) -> Self {
            Self {
                api_url,
                token: "test-token".to_string(),
            }
        }
    }

    impl UpstreamSettings for MockSettings {
        fn api_url(&self) -> &str {
            &self.api_url
        }

        fn token(&self) -> &str {
            &self.token
        }
    }

    fn client_for(server: &MockServer) -> RailwayClient {
        RailwayClient::new(&MockSettings::new(server.url("/graphql/v2"))).unwrap()
    }

    #[tokio::test]
    async fn test_execute_sends_bearer_token_and_returns_data() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql/v2")
                .header("Authorization", "Bearer test-token")
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "query": "query service($id: String!) { service(id: $id) { id } }",
                    "variables": {"id": "svc-1"}
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"data": {"service": {"id": "svc-1"}}}));
        });

        let client = client_for(&server);
        let data = client
            .execute(
                "query service($id: String!) { service(id: $id) { id } }",
                Some(json!({"id": "svc-1"})),
            )
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(data["service"]["id"], "svc-1");
    }

    #[tokio::test]
    async fn test_execute_omits_variables_key_when_absent() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql/v2")
                .json_body(json!({"query": "{ me { id } }"}));
            then.status(200).json_body(json!({"data": {"me": {"id": "u1"}}}));
        });

        let client = client_for(&server);
        let data = client.execute("{ me { id } }", None).await.unwrap();

        api_mock.assert();
        assert_eq!(data["me"]["id"], "u1");
    }

    #[tokio::test]
    async fn test_errors_take_priority_over_data() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/graphql/v2");
            then.status(200).json_body(json!({
                "data": {"service": {"id": "svc-1"}},
                "errors": [{"message": "Not Authorized"}]
            }));
        });

        let client = client_for(&server);
        let err = client.execute("{ service { id } }", None).await.unwrap_err();

        match err {
            OpsError::UpstreamGraphQL { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0]["message"], "Not Authorized");
            }
            other => panic!("expected GraphQL error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_errors_list_is_success() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/graphql/v2");
            then.status(200)
                .json_body(json!({"data": {"ok": true}, "errors": []}));
        });

        let client = client_for(&server);
        let data = client.execute("{ ok }", None).await.unwrap();
        assert_eq!(data["ok"], true);
    }

    #[tokio::test]
    async fn test_missing_data_returns_empty_map() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/graphql/v2");
            then.status(200).json_body(json!({}));
        });

        let client = client_for(&server);
        let data = client.execute("{ ok }", None).await.unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/graphql/v2");
            then.status(502).body("bad gateway");
        });

        let client = client_for(&server);
        let err = client.execute("{ ok }", None).await.unwrap_err();

        assert!(matches!(err, OpsError::UpstreamTransport { .. }));
        assert!(err.to_string().starts_with("Railway API error:"));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_transport_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/graphql/v2");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = client_for(&server);
        let err = client.execute("{ ok }", None).await.unwrap_err();
        assert!(matches!(err, OpsError::UpstreamTransport { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let settings = MockSettings::new(format!("http://127.0.0.1:{}/graphql", port));
        let client = RailwayClient::new(&settings).unwrap();

        let err = client.execute("{ ok }", None).await.unwrap_err();
        assert!(matches!(err, OpsError::UpstreamTransport { .. }));
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let settings = MockSettings {
            api_url: "http://localhost".to_string(),
            token: "abc\ndef".to_string(),
        };
        assert!(matches!(
            RailwayClient::new(&settings),
            Err(OpsError::InvalidConfigValueError { .. })
        ));
    }
}
