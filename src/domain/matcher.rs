use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use serde::{Deserialize, Serialize};

/// Search criteria for service points.
///
/// Only `country` is always required. Every other field is sent (or used for
/// matching) only when it is `Some`, so `Some(String::new())` and `None` are
/// different requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matcher {
    pub country: String,
    pub spid: Option<String>,
    pub carrier: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub house_number: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub weight: Option<f64>,
    pub radius: Option<i64>,
}

impl Matcher {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn spid(mut self, spid: impl Into<String>) -> Self {
        self.spid = Some(spid.into());
        self
    }

    pub fn carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn house_number(mut self, house_number: impl Into<String>) -> Self {
        self.house_number = Some(house_number.into());
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn radius(mut self, radius: i64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// The country, or a precondition error when it is blank.
    pub fn required_country(&self) -> Result<&str> {
        validate_non_empty_string("country", &self.country)
    }

    /// Checks the fields the bounding-box lookup needs and borrows them.
    pub fn lookup(&self) -> Result<ServicePointLookup<'_>> {
        Ok(ServicePointLookup {
            country: self.required_country()?,
            carrier: validate_required_field("carrier", &self.carrier)?,
            latitude: *validate_required_field("latitude", &self.latitude)?,
            longitude: *validate_required_field("longitude", &self.longitude)?,
            postal_code: validate_required_field("postal_code", &self.postal_code)?,
            house_number: validate_required_field("house_number", &self.house_number)?,
            spid: self.spid.as_deref(),
        })
    }
}

/// A [`Matcher`] whose bounding-box fields are known to be present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServicePointLookup<'a> {
    pub country: &'a str,
    pub carrier: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub postal_code: &'a str,
    pub house_number: &'a str,
    pub spid: Option<&'a str>,
}
