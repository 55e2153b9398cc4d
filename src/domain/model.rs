use crate::utils::error::Result;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// String payload produced by every backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(String);

impl Payload {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the payload, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A retrieval result that is not available yet. Resolves to the payload or
/// rejects with the backend's error.
pub type Deferred<'a> = BoxFuture<'a, Result<Payload>>;

/// What a backend hands back in its native calling convention.
pub enum RawResult {
    /// Synchronous backends already have the value.
    Ready(Result<Payload>),
    /// Asynchronous backends hand back work still in flight.
    Deferred(Deferred<'static>),
}

impl RawResult {
    pub fn is_ready(&self) -> bool {
        matches!(self, RawResult::Ready(_))
    }
}

impl fmt::Debug for RawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawResult::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            RawResult::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Which backend variant a configuration asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Local,
    Remote,
    Http,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Local => "local",
            SourceKind::Remote => "remote",
            SourceKind::Http => "http",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
