use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// API key and secret shared by every sub-client of one [`crate::Api`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Reads a JSON `null` the same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A pickup/drop-off location as returned by the service point endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePoint {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default)]
    pub shop_type: Option<String>,
    #[serde(default)]
    pub extra_data: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub house_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carrier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "formatted_opening_times")]
    pub opening_times: HashMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_tomorrow: bool,
    #[serde(default)]
    pub distance: Option<i64>,
}

impl ServicePoint {
    /// Postal code and house number joined by a single space, e.g. `"5611 EM 40"`.
    pub fn identifier(&self) -> String {
        format!("{} {}", self.postal_code, self.house_number)
    }
}

pub type ServicePointList = Vec<ServicePoint>;
