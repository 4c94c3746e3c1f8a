use thiserror::Error;

/// Failure to decode a card record from JSON text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("missing required key: {0}")]
    MissingKey(&'static str),

    #[error("required key is empty: {0}")]
    EmptyKey(&'static str),
}

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to serialize card record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
