use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::adapters::local::DEFAULT_KEY;
use crate::core::{ConfigProvider, SourceKind};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "data-facade")]
#[command(about = "Retrieve data through an interchangeable backend")]
pub struct CliConfig {
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, default_value = DEFAULT_KEY)]
    pub key: String,

    #[arg(long, help = "Read local entries from files in this directory")]
    pub storage_dir: Option<String>,

    #[arg(long, default_value = "100")]
    pub latency_ms: u64,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load the source from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn source_kind(&self) -> Option<SourceKind> {
        self.source
    }

    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn local_key(&self) -> &str {
        &self.key
    }

    fn storage_dir(&self) -> Option<&str> {
        self.storage_dir.as_deref()
    }

    fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    fn remote_payload(&self) -> Option<&str> {
        None
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_source_fields(self)
    }
}
