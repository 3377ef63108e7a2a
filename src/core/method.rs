use crate::core::context::ClientContext;
use crate::domain::model::Credentials;
use crate::domain::panel::Method;
use crate::domain::ports::HttpMethod;
use crate::utils::error::Result;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct MethodsEnvelope {
    shipping_methods: Vec<Method>,
}

#[derive(Deserialize)]
struct MethodEnvelope {
    shipping_method: Method,
}

/// Shipping methods available to the account.
#[derive(Clone)]
pub struct MethodClient {
    context: Arc<ClientContext>,
}

impl MethodClient {
    pub fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    pub fn credentials(&self) -> &Credentials {
        self.context.credentials()
    }

    pub async fn list(&self) -> Result<Vec<Method>> {
        let envelope: MethodsEnvelope = self
            .context
            .panel(HttpMethod::Get, "shipping_methods", None)
            .await?;
        Ok(envelope.shipping_methods)
    }

    pub async fn get(&self, id: i64) -> Result<Method> {
        let envelope: MethodEnvelope = self
            .context
            .panel(HttpMethod::Get, &format!("shipping_methods/{}", id), None)
            .await?;
        Ok(envelope.shipping_method)
    }
}
