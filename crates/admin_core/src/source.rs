use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Record, protocol::decode_records};
use tracing::info;
use url::Url;

use crate::{controller::Command, error::LoadError};

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError>;

    /// Human-readable origin used in logs.
    fn describe(&self) -> String;
}

pub struct HttpRecordSource {
    http: Client,
    url: Url,
}

impl HttpRecordSource {
    pub fn new(url: &str) -> Result<Self, LoadError> {
        let url = Url::parse(url).map_err(|source| LoadError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            url,
        })
    }

    fn http_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Http {
            url: self.url.to_string(),
            source,
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.http_error(e))?
            .error_for_status()
            .map_err(|e| self.http_error(e))?;
        let body = response.bytes().await.map_err(|e| self.http_error(e))?;
        Ok(decode_records(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(decode_records(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the initial records and turns the outcome into the command that
/// lands them. The future holds no reference to the state. There is no retry.
pub async fn fetch_load(source: &dyn RecordSource) -> Command {
    info!(source = %source.describe(), "admin: loading records");

    match source.fetch().await {
        Ok(records) => Command::Load(records),
        Err(err) => Command::LoadFailed(err.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
