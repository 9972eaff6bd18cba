use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    /// Network, HTTP status, timeout or malformed completion payload.
    #[error("Model call failed: {0}")]
    ModelCall(String),

    /// Feedback log append or style profile write failed.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AssistResult<T> = Result<T, AssistError>;
