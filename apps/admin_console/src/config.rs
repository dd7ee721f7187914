use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use admin_core::DEFAULT_PAGE_SIZE;
use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "admin.toml";
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_url: String,
    /// When set, members are read from this file instead of `source_url`.
    pub source_file: Option<PathBuf>,
    pub page_size: NonZeroUsize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            source_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    source_url: Option<String>,
    source_file: Option<PathBuf>,
    page_size: Option<usize>,
    log_filter: Option<String>,
}

/// Defaults, then the config file, then `APP__*` environment variables.
///
/// An explicitly named config file must exist and parse. The implicit
/// `admin.toml` is optional and skipped with a warning on stderr when
/// malformed.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                if let Err(err) = apply_file(&mut settings, &raw) {
                    eprintln!("warning: ignoring malformed {DEFAULT_CONFIG_FILE}: {err}");
                }
            }
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub(crate) fn apply_file(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.source_url {
        settings.source_url = v;
    }
    if let Some(v) = file_cfg.source_file {
        settings.source_file = Some(v);
    }
    if let Some(v) = file_cfg.page_size.and_then(NonZeroUsize::new) {
        settings.page_size = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

pub(crate) fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__SOURCE_URL") {
        settings.source_url = v;
    }
    if let Some(v) = lookup("APP__SOURCE_FILE") {
        settings.source_file = (!v.trim().is_empty()).then(|| PathBuf::from(v));
    }
    if let Some(v) = lookup("APP__PAGE_SIZE") {
        if let Some(parsed) = v.trim().parse::<usize>().ok().and_then(NonZeroUsize::new) {
            settings.page_size = parsed;
        }
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
