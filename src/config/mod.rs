#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_base_url, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_PANEL_URL: &str = "https://panel.sendcloud.sc/api/v2/";
pub const DEFAULT_SERVICE_POINTS_URL: &str = "https://servicepoints.sendcloud.sc/api/v2/service-points/";

/// Where the clients send their requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_panel_url")]
    pub panel_url: String,
    #[serde(default = "default_service_points_url")]
    pub service_points_url: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_panel_url() -> String {
    DEFAULT_PANEL_URL.to_string()
}

fn default_service_points_url() -> String {
    DEFAULT_SERVICE_POINTS_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            panel_url: default_panel_url(),
            service_points_url: default_service_points_url(),
            timeout_seconds: None,
        }
    }
}

impl ApiConfig {
    /// Points both APIs at one host, as a mock server would serve them.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            panel_url: format!("{}/api/v2/", base),
            service_points_url: format!("{}/api/v2/service-points/", base),
            timeout_seconds: None,
        }
    }

    pub fn panel_endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.panel_url)?.join(path)?)
    }

    pub fn service_points_endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&self.service_points_url)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_base_url("panel_url", &self.panel_url)?;
        validate_url("service_points_url", &self.service_points_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
