//! URL construction for the service point endpoint.
//!
//! Parameters are written in ascending key order with form encoding, so the
//! same matcher always yields the same URL.

use crate::domain::matcher::{Matcher, ServicePointLookup};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use url::Url;

/// Half the side of the search square, in degrees.
pub const BOUNDING_BOX_OFFSET: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub ne_latitude: f64,
    pub sw_latitude: f64,
    pub ne_longitude: f64,
    pub sw_longitude: f64,
}

impl BoundingBox {
    pub fn around(latitude: f64, longitude: f64) -> Self {
        Self {
            ne_latitude: latitude + BOUNDING_BOX_OFFSET,
            sw_latitude: latitude - BOUNDING_BOX_OFFSET,
            ne_longitude: longitude + BOUNDING_BOX_OFFSET,
            sw_longitude: longitude - BOUNDING_BOX_OFFSET,
        }
    }
}

fn coordinate(value: f64) -> String {
    format!("{:.4}", value)
}

fn with_params(endpoint: &Url, params: &BTreeMap<&str, String>) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().extend_pairs(params.iter());
    url
}

/// Listing query: country and token always, every other filter only when set.
pub fn listing_url(endpoint: &Url, matcher: &Matcher, access_token: &str) -> Result<Url> {
    let country = matcher.required_country()?;

    let mut params = BTreeMap::new();
    params.insert("country", country.to_uppercase());
    params.insert("access_token", access_token.to_string());

    if let Some(address) = &matcher.address {
        params.insert("address", address.clone());
    }
    if let Some(city) = &matcher.city {
        params.insert("city", city.clone());
    }
    if let Some(house_number) = &matcher.house_number {
        params.insert("house_number", house_number.clone());
    }
    if let Some(weight) = matcher.weight {
        params.insert("weight", format!("{:.4}", weight));
    }
    if let Some(carrier) = &matcher.carrier {
        params.insert("carrier", carrier.clone());
    }
    if let Some(radius) = matcher.radius {
        params.insert("radius", radius.to_string());
    }

    Ok(with_params(endpoint, &params))
}

/// Bounding-box query around the lookup coordinates, restricted to one carrier.
pub fn bounding_box_url(endpoint: &Url, lookup: &ServicePointLookup<'_>, access_token: &str) -> Url {
    let bbox = BoundingBox::around(lookup.latitude, lookup.longitude);

    let mut params = BTreeMap::new();
    params.insert("country", lookup.country.to_uppercase());
    params.insert("ne_latitude", coordinate(bbox.ne_latitude));
    params.insert("sw_latitude", coordinate(bbox.sw_latitude));
    params.insert("ne_longitude", coordinate(bbox.ne_longitude));
    params.insert("sw_longitude", coordinate(bbox.sw_longitude));
    params.insert("access_token", access_token.to_string());
    params.insert("carrier", lookup.carrier.to_string());

    with_params(endpoint, &params)
}
