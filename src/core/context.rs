use crate::config::ApiConfig;
use crate::domain::model::Credentials;
use crate::domain::ports::{HttpMethod, Transport};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Immutable state shared by every sub-client created from one [`crate::Api`].
pub struct ClientContext {
    credentials: Credentials,
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl ClientContext {
    pub fn new(credentials: Credentials, config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let value = self
            .transport
            .request(method, url.as_str(), body, &self.credentials)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Calls `path` relative to the panel API base URL.
    pub(crate) async fn panel<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.config.panel_endpoint(path)?;
        self.call(method, url, body).await
    }
}
