// src/config/models.rs
use serde::Deserialize;
use std::time::Duration;

use super::{parse_timeout, parse_wait, ConfigError, DEFAULT_TIMEOUT, DEFAULT_WAIT};

/// On-disk configuration. Every field is optional.
///
/// `wait` and `timeout` are overridden by their flags. `quiet` and `once`
/// are switches that can only be turned on, so a file value of `true`
/// stays on whatever the command line says.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub wait: Option<String>,
    pub timeout: Option<String>,
    pub quiet: Option<bool>,
    pub once: Option<bool>,
    pub speech: Option<SpeechFileConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechFileConfig {
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Values taken from the command line before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct FlagValues {
    pub wait: Option<String>,
    pub timeout: Option<String>,
    pub quiet: bool,
    pub once: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        let command = if cfg!(target_os = "macos") { "say" } else { "espeak" };
        Self {
            command: command.to_string(),
            args: Vec::new(),
        }
    }
}

/// Immutable run settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub poll_interval: Duration,
    pub probe_timeout: Duration,
    pub speak: bool,
    pub run_once: bool,
    pub speech: SpeechConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5 * 60),
            probe_timeout: Duration::from_secs(3),
            speak: true,
            run_once: false,
            speech: SpeechConfig::default(),
        }
    }
}

impl Settings {
    /// Merge flags over the file config over built-in defaults. The `-q` and
    /// `-1` switches are OR'ed with the file's `quiet` and `once`.
    ///
    /// The wait interval is validated before the timeout so a command line
    /// with two bad values reports the wait time first.
    pub fn resolve(flags: &FlagValues, file: &FileConfig) -> Result<Self, ConfigError> {
        let wait = flags
            .wait
            .as_deref()
            .or(file.wait.as_deref())
            .unwrap_or(DEFAULT_WAIT);
        let poll_interval = parse_wait(wait)?;

        let timeout = flags
            .timeout
            .as_deref()
            .or(file.timeout.as_deref())
            .unwrap_or(DEFAULT_TIMEOUT);
        let probe_timeout = parse_timeout(timeout)?;

        let quiet = flags.quiet || file.quiet.unwrap_or(false);
        let run_once = flags.once || file.once.unwrap_or(false);

        let mut speech = SpeechConfig::default();
        if let Some(file_speech) = &file.speech {
            if let Some(command) = &file_speech.command {
                speech.command = command.clone();
            }
            speech.args = file_speech.args.clone();
        }

        Ok(Self {
            poll_interval,
            probe_timeout,
            speak: !quiet,
            run_once,
            speech,
        })
    }
}
