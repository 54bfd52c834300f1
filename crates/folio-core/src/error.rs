use thiserror::Error;

/// Errors raised by the core library. The chat path itself never fails; these cover
/// loading (config, knowledge files) and the preference store.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule set violates a knowledge base invariant.
    #[error("invalid knowledge base: {0}")]
    InvalidKnowledge(String),
}
