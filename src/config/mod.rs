#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::SourceKind;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_key, validate_path, validate_range, validate_required_field, validate_url,
};

pub const MAX_LATENCY_MS: u64 = 60_000;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Field checks shared by every configuration source.
pub(crate) fn validate_source_fields<C: crate::core::ConfigProvider + ?Sized>(
    config: &C,
) -> Result<()> {
    if config.source_kind() == Some(SourceKind::Http) {
        validate_required_field("source.endpoint", &config.endpoint())?;
    }

    if let Some(endpoint) = config.endpoint() {
        validate_url("source.endpoint", endpoint)?;
    }

    if config.source_kind() == Some(SourceKind::Local) {
        validate_key("source.key", config.local_key())?;
        if let Some(dir) = config.storage_dir() {
            validate_path("source.storage_dir", dir)?;
        }
    }

    validate_range(
        "source.latency_ms",
        config.latency().as_millis() as u64,
        0,
        MAX_LATENCY_MS,
    )?;
    validate_range(
        "source.timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;

    Ok(())
}
