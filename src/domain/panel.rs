// Resources served by the panel API: parcels, shipping methods, sender
// addresses and shop integrations.

use crate::domain::model::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub house_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default)]
    pub country: Option<ParcelCountry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub telephone: String,
    #[serde(default)]
    pub status: Option<ParcelStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_number: String,
    #[serde(default)]
    pub shipment: Option<ShipmentRef>,
    #[serde(default)]
    pub label: Option<Label>,
    #[serde(default)]
    pub to_service_point: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelCountry {
    pub iso_2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_3: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelStatus {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "null_as_default")]
    pub normal_printer: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label_printer: String,
}

/// Body of a parcel creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParcelParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub address: String,
    pub house_number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    /// Kilograms as a decimal string, e.g. `"1.250"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<ShipmentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_service_point: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<i64>,
    pub request_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOutcome {
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carrier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_weight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_weight: String,
    /// `"none"`, `"optional"` or `"required"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_point_input: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<MethodCountry>,
}

impl Method {
    pub fn requires_service_point(&self) -> bool {
        self.service_point_input == "required"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCountry {
    pub id: i64,
    pub iso_2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_3: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderAddress {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub telephone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub house_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_box: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vat_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shop_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shop_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub system: String,
    #[serde(default)]
    pub failing_since: Option<String>,
    #[serde(default)]
    pub last_fetch: Option<String>,
    #[serde(default)]
    pub last_updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_point_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_point_carriers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub webhook_active: bool,
    #[serde(default)]
    pub webhook_url: Option<String>,
}

/// Partial update of an integration; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_point_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_point_carriers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}
