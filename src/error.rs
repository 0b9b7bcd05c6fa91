use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealError {
    #[error("Unknown health condition: {0}")]
    UnknownCondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not generate document: {0}")]
    ExportFailed(String),
}

pub type Result<T> = std::result::Result<T, HealError>;
