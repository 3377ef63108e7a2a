use crate::adapters::http::ReqwestTransport;
use crate::config::ApiConfig;
use crate::core::context::ClientContext;
use crate::core::integration::IntegrationClient;
use crate::core::method::MethodClient;
use crate::core::parcel::ParcelClient;
use crate::core::sender::SenderClient;
use crate::core::servicepoint::ServicePointClient;
use crate::domain::model::Credentials;
use crate::domain::ports::Transport;
use std::sync::Arc;

/// Every SendCloud client, sharing one set of credentials.
///
/// ```no_run
/// # async fn run() -> sendcloud::Result<()> {
/// use sendcloud::{Api, Matcher};
///
/// let api = Api::init("api-key", "api-secret");
/// let matcher = Matcher::new("nl")
///     .carrier("postnl")
///     .coordinates(52.3676, 4.9041)
///     .postal_code("1012 AB")
///     .house_number("14");
/// let id = api.service_point.get_service_point(&matcher).await?;
/// # let _ = id;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Api {
    pub parcel: ParcelClient,
    pub method: MethodClient,
    pub sender: SenderClient,
    pub service_point: ServicePointClient,
    pub integration: IntegrationClient,
}

impl Api {
    /// Builds all clients against the production endpoints. Credentials are
    /// not checked until the first request.
    pub fn init(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::with_config(Credentials::new(api_key, api_secret), ApiConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ApiConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::with_timeout(config.timeout()));
        Self::with_transport(credentials, config, transport)
    }

    pub fn with_transport(
        credentials: Credentials,
        config: ApiConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let context = Arc::new(ClientContext::new(credentials, config, transport));

        Self {
            parcel: ParcelClient::new(Arc::clone(&context)),
            method: MethodClient::new(Arc::clone(&context)),
            sender: SenderClient::new(Arc::clone(&context)),
            service_point: ServicePointClient::new(Arc::clone(&context)),
            integration: IntegrationClient::new(context),
        }
    }
}
