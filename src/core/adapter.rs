use crate::adapters::http::HttpBackend;
use crate::adapters::local::{LocalBackend, DEFAULT_LOCAL_PAYLOAD};
use crate::adapters::remote::{RemoteBackend, DEFAULT_ENDPOINT};
use crate::core::{Backend, ConfigProvider, DataSource, Payload, RawResult, SourceKind};
use crate::utils::error::{Result, RetrievalError};
use async_trait::async_trait;
use std::fmt;

/// Wraps exactly one backend and exposes it through [`DataSource`].
///
/// Synchronous answers are lifted into the same deferred value asynchronous
/// backends produce, so callers never see the difference.
pub struct BackendAdapter {
    backend: Box<dyn Backend>,
}

impl BackendAdapter {
    /// Wraps a concrete backend; the adapter owns it for its whole lifetime.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Fails with `AdapterMisconfiguration` when no backend is supplied.
    pub fn try_new(backend: Option<Box<dyn Backend>>) -> Result<Self> {
        let backend = backend
            .ok_or_else(|| RetrievalError::misconfigured("adapter constructed without a backend"))?;
        tracing::debug!("Adapter wraps '{}' backend", backend.name());
        Ok(Self { backend })
    }

    /// Starts a builder whose `build` fails if no backend was given.
    pub fn builder() -> AdapterBuilder {
        AdapterBuilder::default()
    }

    /// Builds the backend the configuration names and wraps it.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::try_new(Some(build_backend(config)?))
    }

    /// Name of the wrapped backend, for diagnostics only.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

impl fmt::Debug for BackendAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendAdapter")
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[async_trait]
impl DataSource for BackendAdapter {
    async fn get(&self) -> Result<Payload> {
        match self.backend.fetch_raw() {
            RawResult::Ready(result) => result,
            RawResult::Deferred(pending) => pending.await,
        }
    }
}

/// Step-by-step construction of a [`BackendAdapter`].
#[derive(Default)]
pub struct AdapterBuilder {
    backend: Option<Box<dyn Backend>>,
}

impl AdapterBuilder {
    pub fn backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Fails with `AdapterMisconfiguration` when `backend` was never called.
    pub fn build(self) -> Result<BackendAdapter> {
        BackendAdapter::try_new(self.backend)
    }
}

/// The one place that names concrete backend types.
pub fn build_backend<C: ConfigProvider + ?Sized>(config: &C) -> Result<Box<dyn Backend>> {
    let kind = config.source_kind().ok_or_else(|| {
        RetrievalError::misconfigured("no source type configured (expected local, remote or http)")
    })?;
    tracing::debug!("Wiring {} backend", kind);

    let backend: Box<dyn Backend> = match kind {
        SourceKind::Local => {
            let key = config.local_key();
            match config.storage_dir() {
                Some(dir) => Box::new(LocalBackend::in_directory(dir, key)),
                // Simulated storage: the configured key holds the default entry.
                None => Box::new(LocalBackend::with_entry(key, DEFAULT_LOCAL_PAYLOAD)),
            }
        }
        SourceKind::Remote => {
            let mut backend = RemoteBackend::new(config.endpoint().unwrap_or(DEFAULT_ENDPOINT))
                .with_latency(config.latency());
            if let Some(payload) = config.remote_payload() {
                backend = backend.with_payload(payload);
            }
            Box::new(backend)
        }
        SourceKind::Http => {
            let endpoint = config
                .endpoint()
                .ok_or_else(|| RetrievalError::misconfigured("http source requires an endpoint"))?;
            Box::new(HttpBackend::with_options(
                endpoint,
                config.request_timeout(),
                config.headers(),
            )?)
        }
    };

    Ok(backend)
}
