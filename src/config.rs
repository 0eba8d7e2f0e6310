use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_DATA_PATH: &str = "data/entries.json";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings, read once at startup and handed to the store and the
/// reflection generator.
#[derive(Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub export_dir: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub provider_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_path = non_empty("JOURNAL_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let export_dir = non_empty("JOURNAL_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                data_path
                    .parent()
                    .map(PathBuf::from)
                    .unwrap_or_default()
            });

        let provider_timeout = match non_empty("JOURNAL_PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("JOURNAL_PROVIDER_TIMEOUT_SECS must be a number, got {raw:?}")
                })?;
                if secs == 0 {
                    bail!("JOURNAL_PROVIDER_TIMEOUT_SECS must be at least 1");
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            data_path,
            export_dir,
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            provider_timeout,
        })
    }
}
