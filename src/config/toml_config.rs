use crate::config::ApiConfig;
use crate::domain::model::Credentials;
use crate::utils::error::{Result, SendcloudError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file read by the command line tool.
///
/// ```toml
/// [credentials]
/// api_key = "${SENDCLOUD_API_KEY}"
/// api_secret = "${SENDCLOUD_API_SECRET}"
///
/// [endpoints]
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub credentials: Option<CredentialsConfig>,
    #[serde(default)]
    pub endpoints: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub api_key: String,
    pub api_secret: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SendcloudError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SendcloudError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials
            .as_ref()
            .map(|c| Credentials::new(c.api_key.clone(), c.api_secret.clone()))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(credentials) = &self.credentials {
            validate_non_empty_string("credentials.api_key", &credentials.api_key)?;
            validate_non_empty_string("credentials.api_secret", &credentials.api_secret)?;
        }
        self.endpoints.validate()
    }
}
