use std::path::PathBuf;

use shared::error::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid source url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("member request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },
    #[error("failed to read member file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
