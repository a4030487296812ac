// src/announce/mod.rs
mod speech;

pub use speech::SpeechAnnouncer;

use crate::config::Settings;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AnnounceError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Speaks a status line. Best effort: callers log failures and move on.
#[async_trait]
pub trait Announcer: Send + Sync {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError>;

    fn name(&self) -> &'static str;
}

/// Announcer used in quiet mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

#[async_trait]
impl Announcer for Silent {
    async fn announce(&self, _text: &str) -> Result<(), AnnounceError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "silent"
    }
}

pub fn from_settings(settings: &Settings) -> Arc<dyn Announcer> {
    if settings.speak {
        Arc::new(SpeechAnnouncer::new(settings.speech.clone()))
    } else {
        Arc::new(Silent)
    }
}
