use crate::domain::model::{Payload, RawResult, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// A concrete data source. Synchronous backends answer with
/// [`RawResult::Ready`], asynchronous ones with [`RawResult::Deferred`].
pub trait Backend: Send + Sync {
    fn fetch_raw(&self) -> RawResult;

    /// Short label used in diagnostics and error messages.
    fn name(&self) -> &str;
}

/// The uniform retrieval contract consumers depend on. Every implementation
/// returns a deferred value, whatever the calling convention behind it.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get(&self) -> Result<Payload>;
}

/// Everything the wiring needs to pick and build a backend. Implemented by
/// the CLI flags and the TOML file.
pub trait ConfigProvider: Send + Sync {
    /// `None` when the configuration never named a source type.
    fn source_kind(&self) -> Option<SourceKind>;
    fn endpoint(&self) -> Option<&str>;
    fn local_key(&self) -> &str;
    fn storage_dir(&self) -> Option<&str>;
    fn latency(&self) -> Duration;
    fn remote_payload(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
    fn headers(&self) -> Option<&HashMap<String, String>>;
}

#[async_trait]
impl<S: DataSource + ?Sized> DataSource for Box<S> {
    async fn get(&self) -> Result<Payload> {
        (**self).get().await
    }
}
