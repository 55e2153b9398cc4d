use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::adapters::local::DEFAULT_KEY;
use crate::adapters::remote::DEFAULT_LATENCY;
use crate::core::{ConfigProvider, SourceKind};
use crate::utils::error::{Result, RetrievalError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: Option<SourceKind>,
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub storage_dir: Option<String>,
    pub latency_ms: Option<u64>,
    pub payload: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RetrievalError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // Environment substitution happens before parsing
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RetrievalError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RetrievalError::Config {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// `[logging] verbose`, off by default.
    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_kind(&self) -> Option<SourceKind> {
        self.source.r#type
    }

    fn endpoint(&self) -> Option<&str> {
        self.source.endpoint.as_deref()
    }

    fn local_key(&self) -> &str {
        self.source.key.as_deref().unwrap_or(DEFAULT_KEY)
    }

    fn storage_dir(&self) -> Option<&str> {
        self.source.storage_dir.as_deref()
    }

    fn latency(&self) -> Duration {
        self.source
            .latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY)
    }

    fn remote_payload(&self) -> Option<&str> {
        self.source.payload.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        self.source
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        self.source.headers.as_ref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        super::validate_source_fields(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
type = "remote"
endpoint = "https://api.example.com/data"
latency_ms = 10
payload = "custom payload"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source_kind(), Some(SourceKind::Remote));
        assert_eq!(config.endpoint(), Some("https://api.example.com/data"));
        assert_eq!(config.latency(), Duration::from_millis(10));
        assert_eq!(config.remote_payload(), Some("custom payload"));
        assert!(config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_defaults_when_fields_omitted() {
        let config = TomlConfig::from_toml_str("[source]\ntype = \"local\"\n").unwrap();

        assert_eq!(config.local_key(), DEFAULT_KEY);
        assert_eq!(config.latency(), DEFAULT_LATENCY);
        assert_eq!(config.request_timeout(), DEFAULT_TIMEOUT);
        assert!(config.headers().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_type_parses_but_has_no_kind() {
        let config = TomlConfig::from_toml_str("[source]\nkey = \"key\"\n").unwrap();
        assert_eq!(config.source_kind(), None);
    }

    #[test]
    fn test_unknown_type_is_config_error() {
        let result = TomlConfig::from_toml_str("[source]\ntype = \"ftp\"\n");
        assert!(matches!(result, Err(RetrievalError::Config { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DATA_FACADE_TEST_ENDPOINT", "https://test.api.com");

        let toml_content = r#"
[source]
type = "http"
endpoint = "${DATA_FACADE_TEST_ENDPOINT}"

[source.headers]
Accept = "application/json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), Some("https://test.api.com"));
        assert_eq!(
            config.headers().and_then(|h| h.get("Accept")).map(String::as_str),
            Some("application/json")
        );

        std::env::remove_var("DATA_FACADE_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[source]
type = "local"
key = "${DATA_FACADE_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.local_key(), "${DATA_FACADE_TEST_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[source]
type = "http"
endpoint = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let traversal = TomlConfig::from_toml_str("[source]\ntype = \"local\"\nkey = \"../etc\"\n")
            .unwrap();
        assert!(traversal.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
type = "local"
key = "session"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.local_key(), "session");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(RetrievalError::Io(_))));
    }
}
