use crate::core::context::ClientContext;
use crate::domain::model::Credentials;
use crate::domain::panel::SenderAddress;
use crate::domain::ports::HttpMethod;
use crate::utils::error::Result;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct SenderAddressesEnvelope {
    sender_addresses: Vec<SenderAddress>,
}

#[derive(Clone)]
pub struct SenderClient {
    context: Arc<ClientContext>,
}

impl SenderClient {
    pub fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    pub fn credentials(&self) -> &Credentials {
        self.context.credentials()
    }

    pub async fn list(&self) -> Result<Vec<SenderAddress>> {
        let envelope: SenderAddressesEnvelope = self
            .context
            .panel(HttpMethod::Get, "user/addresses/sender", None)
            .await?;
        Ok(envelope.sender_addresses)
    }
}
