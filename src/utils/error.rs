use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Backend '{backend}' unavailable: {reason}")]
    BackendUnavailable { backend: String, reason: String },

    #[error("Adapter misconfiguration: {message}")]
    AdapterMisconfiguration { message: String },

    #[error("No local entry for key '{key}'")]
    MissingEntry { key: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

impl RetrievalError {
    pub fn unavailable(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::AdapterMisconfiguration {
            message: message.into(),
        }
    }

    /// True for errors raised while loading or wiring configuration, before
    /// any backend was asked for data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::AdapterMisconfiguration { .. }
                | Self::Config { .. }
                | Self::InvalidConfigValue { .. }
                | Self::MissingConfig { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
