use crate::domain::model::{Payload, RawResult};
use crate::domain::ports::Backend;
use crate::utils::error::{Result, RetrievalError};
use futures::FutureExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Asynchronous backend issuing a real HTTP GET and decoding the JSON body.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Client with the default timeout and no extra headers.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_options(endpoint, DEFAULT_TIMEOUT, None)
    }

    /// Client with a request timeout and headers sent on every request.
    /// Invalid header names or values are rejected here, not at request time.
    pub fn with_options(
        endpoint: impl Into<String>,
        timeout: Duration,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(timeout);
        if let Some(headers) = headers {
            builder = builder.default_headers(header_map(headers)?);
        }

        let client = builder
            .build()
            .map_err(|e| RetrievalError::misconfigured(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// URL requested on every `fetch_raw`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            RetrievalError::InvalidConfigValue {
                field: "source.headers".to_string(),
                value: name.clone(),
                reason: e.to_string(),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| RetrievalError::InvalidConfigValue {
                field: format!("source.headers.{}", name),
                value: value.clone(),
                reason: e.to_string(),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// A JSON string body is the payload itself; anything else is kept as
/// compact JSON text.
pub(crate) fn payload_from_json(value: serde_json::Value) -> Result<Payload> {
    match value {
        serde_json::Value::String(text) => Ok(Payload::from(text)),
        other => Ok(Payload::from(serde_json::to_string(&other)?)),
    }
}

async fn fetch_json(client: Client, endpoint: String) -> Result<Payload> {
    tracing::debug!("Making API request to: {}", endpoint);
    let response = client
        .get(&endpoint)
        .send()
        .await
        .map_err(|e| RetrievalError::unavailable("http", e.to_string()))?;

    // Non-2xx answers count as an unavailable source
    let status = response.status();
    tracing::debug!("API response status: {}", status);
    if !status.is_success() {
        return Err(RetrievalError::unavailable(
            "http",
            format!("{} returned status {}", endpoint, status),
        ));
    }

    // Decode
    let body = response
        .bytes()
        .await
        .map_err(|e| RetrievalError::unavailable("http", e.to_string()))?;
    let value: serde_json::Value = serde_json::from_slice(&body)?;
    payload_from_json(value)
}

impl Backend for HttpBackend {
    fn fetch_raw(&self) -> RawResult {
        RawResult::Deferred(fetch_json(self.client.clone(), self.endpoint().to_string()).boxed())
    }

    fn name(&self) -> &str {
        "http"
    }
}
