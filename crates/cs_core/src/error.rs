use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarrativeError {
    /// Input is missing a required field or violates a match-record invariant.
    #[error("Malformed match record: {0}")]
    MalformedSchema(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A composer was handed a value it cannot describe (e.g. a team with no roster).
    #[error("Unexpected internal state: {0}")]
    UnexpectedState(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NarrativeError {
    /// True when the failure was caused by the shape of the input rather than by the engine.
    pub fn is_bad_input(&self) -> bool {
        match self {
            NarrativeError::MalformedSchema(_) => true,
            NarrativeError::Json(err) => !err.is_io(),
            NarrativeError::UnexpectedState(_) => false,
            NarrativeError::InvalidConfig(_) => true,
            NarrativeError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, NarrativeError>;
