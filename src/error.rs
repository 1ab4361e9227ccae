use thiserror::Error;

#[derive(Error, Debug)]
pub enum CofounderError {
    #[error("API key is missing. Please add it in Settings.")]
    MissingCredential,

    #[error("{0}")]
    CompletionFailed(String),

    #[error("A completion is already in progress for this prompt")]
    RequestInFlight,

    #[error("Stored state could not be parsed: {0}")]
    MalformedStoredState(String),

    #[error("Unknown placeholder: [{0}]")]
    UnknownPlaceholder(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CofounderError>;
