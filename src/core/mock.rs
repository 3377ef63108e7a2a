use crate::domain::model::Credentials;
use crate::domain::ports::{HttpMethod, Transport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub api_key: String,
}

/// Records every request and answers each with the same canned body.
#[derive(Clone)]
pub struct MockTransport {
    response: serde_json::Value,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<serde_json::Value>,
        credentials: &Credentials,
    ) -> Result<serde_json::Value> {
        self.calls.lock().await.push(RecordedCall {
            method,
            url: url.to_string(),
            body,
            api_key: credentials.api_key().to_string(),
        });
        Ok(self.response.clone())
    }
}
