// src/health/checker.rs
use super::{CheckOutcome, DownReason, SiteClient};
use crate::config::Target;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Runs one bounded-time GET against a target.
///
/// Each call spawns the request on its own task, hands the result back over
/// a fresh oneshot channel and races that channel against the timeout. The
/// request task is aborted once the race is decided, so a late response is
/// never seen by this call or any later one.
#[derive(Clone)]
pub struct SiteChecker {
    client: Arc<dyn SiteClient>,
    timeout: Duration,
}

impl SiteChecker {
    pub fn new(client: Arc<dyn SiteClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn check(&self, target: &Target) -> CheckOutcome {
        let (response_tx, response_rx) = oneshot::channel();
        let client = self.client.clone();
        let url = target.url().clone();

        let request = tokio::spawn(async move {
            let result = client.fetch_status(&url).await;
            // Receiver is gone if the timer already won.
            let _ = response_tx.send(result);
        });

        let outcome = tokio::select! {
            received = response_rx => match received {
                Ok(Ok(status)) if status == reqwest::StatusCode::OK => CheckOutcome::Up,
                Ok(Ok(status)) => CheckOutcome::Down(DownReason::Status(status)),
                Ok(Err(e)) => CheckOutcome::Down(DownReason::Connect(e.to_string())),
                Err(_) => CheckOutcome::Down(DownReason::Connect(
                    "request task ended without a response".to_string(),
                )),
            },
            _ = sleep(self.timeout) => CheckOutcome::TimedOut,
        };

        request.abort();

        debug!(
            target_site = %target,
            client = self.client.name(),
            %outcome,
            "probe finished"
        );
        outcome
    }
}
