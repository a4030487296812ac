// src/announce/speech.rs
use super::{AnnounceError, Announcer};
use crate::config::SpeechConfig;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Hands the text to a text-to-speech program (`say`, `espeak`, ...) as its
/// last argument and waits for it to finish speaking.
#[derive(Debug, Clone)]
pub struct SpeechAnnouncer {
    config: SpeechConfig,
}

impl SpeechAnnouncer {
    pub fn new(config: SpeechConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Announcer for SpeechAnnouncer {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        debug!(command = %self.config.command, text, "announcing");

        let status = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(text)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| AnnounceError::Spawn {
                command: self.config.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(AnnounceError::Failed {
                command: self.config.command.clone(),
                status,
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "speech"
    }
}
