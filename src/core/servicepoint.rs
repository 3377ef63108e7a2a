use crate::core::context::ClientContext;
use crate::core::{query, resolver};
use crate::domain::matcher::Matcher;
use crate::domain::model::{Credentials, ServicePointList};
use crate::domain::ports::HttpMethod;
use crate::utils::error::Result;
use std::sync::Arc;

/// Service point search and resolution.
#[derive(Clone)]
pub struct ServicePointClient {
    context: Arc<ClientContext>,
}

impl ServicePointClient {
    pub fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    pub fn credentials(&self) -> &Credentials {
        self.context.credentials()
    }

    /// Lists the service points matching the filters set on `matcher`.
    ///
    /// Fails with [`crate::SendcloudError::MissingField`] before any request
    /// when the country is blank.
    pub async fn get_service_points(&self, matcher: &Matcher) -> Result<ServicePointList> {
        let endpoint = self.context.config().service_points_endpoint()?;
        let url = query::listing_url(&endpoint, matcher, self.credentials().api_key())?;

        tracing::debug!(country = %matcher.country, "Listing service points");
        let points: ServicePointList = self.context.call(HttpMethod::Get, url, None).await?;
        tracing::debug!("Received {} service points", points.len());

        Ok(points)
    }

    /// Resolves the postal code and house number (or code) on `matcher` to the
    /// SendCloud service point ID.
    ///
    /// Searches a small box around the matcher's coordinates for its carrier,
    /// then returns the first candidate whose unaccented identifier or code
    /// matches. Carrier, coordinates, postal code and house number are required.
    pub async fn get_service_point(&self, matcher: &Matcher) -> Result<i64> {
        let lookup = matcher.lookup()?;
        let endpoint = self.context.config().service_points_endpoint()?;
        let url = query::bounding_box_url(&endpoint, &lookup, self.credentials().api_key());

        tracing::debug!(carrier = lookup.carrier, "Resolving service point");
        let candidates: ServicePointList = self.context.call(HttpMethod::Get, url, None).await?;

        let id = resolver::resolve(&lookup, &candidates)?;
        tracing::debug!("Resolved service point {} among {} candidates", id, candidates.len());
        Ok(id)
    }
}
