use tinct_core::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid color: {0}")]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
