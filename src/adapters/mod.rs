// Adapters layer: concrete backends for the sources data can come from.

pub mod http;
pub mod local;
pub mod remote;

pub use http::HttpBackend;
pub use local::LocalBackend;
pub use remote::RemoteBackend;
