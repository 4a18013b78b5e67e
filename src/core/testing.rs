use crate::domain::ports::GraphQLGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub document: String,
    pub variables: Option<Value>,
}

impl RecordedCall {
    pub fn is(&self, document: &str) -> bool {
        self.document == document
    }
}

type Responder = dyn Fn(&str, Option<&Value>) -> Result<Map<String, Value>> + Send + Sync;

/// Gateway double that answers through a closure and records every call.
#[derive(Clone)]
pub struct MockGateway {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGateway {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, Option<&Value>) -> Result<Map<String, Value>> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn count(&self, document: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| call.is(document))
            .count()
    }
}

#[async_trait]
impl GraphQLGateway for MockGateway {
    async fn execute(&self, document: &str, variables: Option<Value>) -> Result<Map<String, Value>> {
        let result = (self.responder)(document, variables.as_ref());
        self.calls.lock().await.push(RecordedCall {
            document: document.to_string(),
            variables,
        });
        result
    }
}

pub fn data(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("test data must be a JSON object, got {}", other),
    }
}
