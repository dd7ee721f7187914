use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("member payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("member payload must be a JSON array")]
    NotAnArray,
    #[error("member entry {index} is missing string field '{field}'")]
    MissingField { index: usize, field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not an editable field (expected name or email)")]
pub struct UnknownFieldError(pub String);
