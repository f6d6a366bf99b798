use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Missing or invalid configuration. Fatal before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// The generation call failed or returned unusable text.
    #[error("generation error: {0}")]
    Generation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
