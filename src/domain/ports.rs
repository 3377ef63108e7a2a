use crate::domain::model::Credentials;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        };
        f.write_str(name)
    }
}

/// Sends one authenticated request and hands back the decoded JSON body.
///
/// Implementations must not retry; a failed call surfaces its error as is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<serde_json::Value>,
        credentials: &Credentials,
    ) -> Result<serde_json::Value>;
}
