use crate::domain::model::{Payload, RawResult};
use crate::domain::ports::Backend;
use crate::utils::error::RetrievalError;
use futures::FutureExt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://vk.com";
pub const DEFAULT_REMOTE_PAYLOAD: &str = "data from fetch";
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Asynchronous backend simulating a network request. Nothing leaves the
/// process; the endpoint is only used for diagnostics.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    endpoint: String,
    latency: Duration,
    /// `None` simulates an unreachable endpoint.
    response: Option<Payload>,
}

impl RemoteBackend {
    /// Reachable endpoint answering with the default payload after the
    /// default latency.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            latency: DEFAULT_LATENCY,
            response: Some(Payload::from(DEFAULT_REMOTE_PAYLOAD)),
        }
    }

    /// Every fetch rejects with `BackendUnavailable` once the latency elapses.
    pub fn unreachable(endpoint: impl Into<String>) -> Self {
        Self {
            response: None,
            ..Self::new(endpoint)
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.response = Some(payload.into());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for RemoteBackend {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Backend for RemoteBackend {
    fn fetch_raw(&self) -> RawResult {
        let endpoint = self.endpoint().to_string();
        let latency = self.latency();
        let response = self.response.clone();

        RawResult::Deferred(
            async move {
                tracing::debug!("Requesting {} (simulated latency {:?})", endpoint, latency);
                if !latency.is_zero() {
                    tokio::time::sleep(latency).await;
                }

                response.ok_or_else(|| {
                    RetrievalError::unavailable("remote", format!("{} is unreachable", endpoint))
                })
            }
            .boxed(),
        )
    }

    fn name(&self) -> &str {
        "remote"
    }
}
