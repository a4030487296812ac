// src/config/mod.rs
mod models;
mod target;

pub use models::*;
pub use target::{normalize_scheme, Target};

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_WAIT: &str = "5m";
pub const DEFAULT_TIMEOUT: &str = "3s";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("[!] please supply a site!")]
    MissingSite,

    #[error("could not parse wait time: {0}")]
    InvalidWait(String),

    #[error("could not parse timeout value: {0}")]
    InvalidTimeout(String),

    #[error("[!] invalid site {site}: {source}")]
    InvalidSite {
        site: String,
        source: url::ParseError,
    },

    #[error("could not load config file: {0:#}")]
    File(anyhow::Error),
}

/// Load a config file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str());
    let config: FileConfig = if extension == Some("yaml") || extension == Some("yml") {
        serde_yaml::from_str(&contents).context("failed to parse YAML config")?
    } else {
        serde_json::from_str(&contents).context("failed to parse JSON config")?
    };

    Ok(config)
}

pub fn parse_wait(raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw).map_err(|e| ConfigError::InvalidWait(e.to_string()))
}

pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let timeout =
        humantime::parse_duration(raw).map_err(|e| ConfigError::InvalidTimeout(e.to_string()))?;
    if timeout.is_zero() {
        return Err(ConfigError::InvalidTimeout(
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(timeout)
}
