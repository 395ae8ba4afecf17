use thiserror::Error;

/// Failures raised by repository adapters.
///
/// The engine logs these and carries on: a committed mutation stays committed
/// even when the adapter could not record it.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {message}")]
    Invalid { message: String },
    #[error("Rules file {path}: {source}")]
    RulesFile {
        path: String,
        #[source]
        source: RepoError,
    },
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
