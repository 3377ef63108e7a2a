use crate::domain::model::Credentials;
use crate::domain::ports::{HttpMethod, Transport};
use crate::utils::error::{Result, SendcloudError};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// `{"error": {"code": 404, "request": "api/v2/parcels/1", "message": "Not found"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<i64>,
    message: String,
}

/// Default [`Transport`] backed by `reqwest`, authenticating with HTTP Basic.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }
}

fn api_error(status: StatusCode, body: &str) -> SendcloudError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => SendcloudError::ApiError {
            status: status.as_u16(),
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => SendcloudError::ApiError {
            status: status.as_u16(),
            code: None,
            message: body.chars().take(200).collect(),
        },
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<serde_json::Value>,
        credentials: &Credentials,
    ) -> Result<serde_json::Value> {
        let http_method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        };

        let mut request = self
            .client
            .request(http_method, url)
            .basic_auth(credentials.api_key(), Some(credentials.api_secret()))
            .header("Accept", "application/json");

        if let Some(payload) = &body {
            request = request.json(payload);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("{} {}", method, url.split('?').next().unwrap_or(url));
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        if !status.is_success() {
            let err = api_error(status, &text);
            tracing::warn!("SendCloud request failed: {}", err);
            return Err(err);
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn credentials() -> Credentials {
        Credentials::new("key", "secret")
    }

    #[tokio::test]
    async fn test_request_sends_basic_auth_and_decodes_json() {
        let server = MockServer::start();
        // base64("key:secret")
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/shipping_methods")
                .header("authorization", "Basic a2V5OnNlY3JldA==");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"shipping_methods": []}));
        });

        let transport = ReqwestTransport::new();
        let value = transport
            .request(
                HttpMethod::Get,
                &server.url("/api/v2/shipping_methods"),
                None,
                &credentials(),
            )
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(value, serde_json::json!({"shipping_methods": []}));
    }

    #[tokio::test]
    async fn test_request_sends_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v2/integrations/3")
                .json_body(serde_json::json!({"webhook_active": true}));
            then.status(200)
                .json_body(serde_json::json!({"id": 3}));
        });

        let transport = ReqwestTransport::with_timeout(Some(Duration::from_secs(5)));
        let value = transport
            .request(
                HttpMethod::Put,
                &server.url("/api/v2/integrations/3"),
                Some(serde_json::json!({"webhook_active": true})),
                &credentials(),
            )
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(value["id"], 3);
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_api_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v2/parcels/1");
            then.status(404).json_body(serde_json::json!({
                "error": {"code": 404, "request": "api/v2/parcels/1", "message": "No Parcel matches the given query."}
            }));
        });

        let transport = ReqwestTransport::new();
        let err = transport
            .request(HttpMethod::Get, &server.url("/api/v2/parcels/1"), None, &credentials())
            .await
            .unwrap_err();

        api_mock.assert();
        match err {
            SendcloudError::ApiError { status, code, message } => {
                assert_eq!(status, 404);
                assert_eq!(code, Some(404));
                assert_eq!(message, "No Parcel matches the given query.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_keeps_body_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(502).body("Bad Gateway");
        });

        let err = ReqwestTransport::new()
            .request(HttpMethod::Get, &server.url("/broken"), None, &credentials())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SendcloudError::ApiError { status: 502, code: None, ref message } if message == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/garbled");
            then.status(200).body("{not json");
        });

        let err = ReqwestTransport::new()
            .request(HttpMethod::Get, &server.url("/garbled"), None, &credentials())
            .await
            .unwrap_err();

        assert!(matches!(err, SendcloudError::SerializationError(_)));
    }
}
