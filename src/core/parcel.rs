use crate::core::context::ClientContext;
use crate::domain::model::Credentials;
use crate::domain::panel::{CancelOutcome, Parcel, ParcelParams};
use crate::domain::ports::HttpMethod;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
struct ParcelRequest<'a> {
    parcel: &'a ParcelParams,
}

#[derive(Deserialize)]
struct ParcelEnvelope {
    parcel: Parcel,
}

#[derive(Clone)]
pub struct ParcelClient {
    context: Arc<ClientContext>,
}

impl ParcelClient {
    pub fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    pub fn credentials(&self) -> &Credentials {
        self.context.credentials()
    }

    pub async fn create(&self, params: &ParcelParams) -> Result<Parcel> {
        let body = serde_json::to_value(ParcelRequest { parcel: params })?;
        let envelope: ParcelEnvelope = self
            .context
            .panel(HttpMethod::Post, "parcels", Some(body))
            .await?;
        tracing::info!("Created parcel {}", envelope.parcel.id);
        Ok(envelope.parcel)
    }

    pub async fn get(&self, id: i64) -> Result<Parcel> {
        let envelope: ParcelEnvelope = self
            .context
            .panel(HttpMethod::Get, &format!("parcels/{}", id), None)
            .await?;
        Ok(envelope.parcel)
    }

    /// Cancels an announced parcel, or deletes one that was not announced yet.
    pub async fn cancel(&self, id: i64) -> Result<CancelOutcome> {
        self.context
            .panel(HttpMethod::Post, &format!("parcels/{}/cancel", id), None)
            .await
    }
}
