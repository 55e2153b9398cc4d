pub mod adapter;
pub mod consumer;

pub use crate::domain::model::{Deferred, Payload, RawResult, SourceKind};
pub use crate::domain::ports::{Backend, ConfigProvider, DataSource};
pub use crate::utils::error::Result;
