#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("empty glob pattern")]
    EmptyPattern,

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
