use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::i18n::LanguageId;

/// Application configuration loaded from environment variables.
/// Every key has a default; the builder runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where export artifacts land.
    pub output_dir: PathBuf,
    /// Where the single persisted key (the language flag) lives.
    pub data_dir: PathBuf,
    /// Language used before the user has confirmed a selection.
    pub default_language: LanguageId,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_language = match std::env::var("RESUME_DEFAULT_LANGUAGE") {
            Ok(raw) => raw
                .parse::<LanguageId>()
                .map_err(anyhow::Error::msg)
                .context("RESUME_DEFAULT_LANGUAGE must be one of: en, hi, od")?,
            Err(_) => LanguageId::DEFAULT,
        };

        Ok(Config {
            output_dir: env_path("RESUME_OUTPUT_DIR").unwrap_or_else(|| PathBuf::from(".")),
            data_dir: env_path("RESUME_DATA_DIR").unwrap_or_else(default_data_dir),
            default_language,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("resume-builder"))
        .unwrap_or_else(|| PathBuf::from("."))
}
