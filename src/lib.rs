pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpBackend, LocalBackend, RemoteBackend};
pub use crate::core::{
    adapter::BackendAdapter, consumer::DataConsumer, Backend, ConfigProvider, DataSource,
    Deferred, Payload, RawResult, SourceKind,
};
pub use utils::error::{Result, RetrievalError};
