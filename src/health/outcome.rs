// src/health/outcome.rs
use reqwest::StatusCode;
use std::fmt;

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Up,
    Down(DownReason),
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownReason {
    /// The request never produced a response (DNS, refused, reset, ...).
    Connect(String),
    /// A response arrived with something other than 200.
    Status(StatusCode),
}

impl CheckOutcome {
    pub fn is_up(&self) -> bool {
        matches!(self, CheckOutcome::Up)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Up => f.write_str("up"),
            CheckOutcome::Down(reason) => write!(f, "down ({})", reason),
            CheckOutcome::TimedOut => f.write_str("timed out"),
        }
    }
}

impl fmt::Display for DownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownReason::Connect(err) => f.write_str(err),
            DownReason::Status(status) => write!(f, "HTTP {}", status),
        }
    }
}
