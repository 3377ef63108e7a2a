use crate::core::context::ClientContext;
use crate::domain::model::Credentials;
use crate::domain::panel::{Integration, IntegrationParams};
use crate::domain::ports::HttpMethod;
use crate::utils::error::Result;
use std::sync::Arc;

/// Shop integrations connected to the account.
#[derive(Clone)]
pub struct IntegrationClient {
    context: Arc<ClientContext>,
}

impl IntegrationClient {
    pub fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    pub fn credentials(&self) -> &Credentials {
        self.context.credentials()
    }

    pub async fn list(&self) -> Result<Vec<Integration>> {
        self.context
            .panel(HttpMethod::Get, "integrations", None)
            .await
    }

    pub async fn update(&self, id: i64, params: &IntegrationParams) -> Result<Integration> {
        let body = serde_json::to_value(params)?;
        let integration: Integration = self
            .context
            .panel(HttpMethod::Put, &format!("integrations/{}", id), Some(body))
            .await?;
        tracing::info!("Updated integration {}", integration.id);
        Ok(integration)
    }
}
