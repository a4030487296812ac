// src/monitor/poll.rs
use crate::announce::Announcer;
use crate::config::{Settings, Target};
use crate::health::{CheckOutcome, DownReason, SiteChecker, SiteClient};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// An up site always ends the loop; anything else ends it only in run-once mode.
pub fn decide(outcome: &CheckOutcome, run_once: bool) -> Step {
    if outcome.is_up() || run_once {
        Step::Stop
    } else {
        Step::Continue
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSummary {
    pub checks: u32,
    pub last: CheckOutcome,
}

/// Checks the target, reports, and sleeps until a stop condition is met.
pub struct PollLoop<W> {
    target: Target,
    settings: Arc<Settings>,
    checker: SiteChecker,
    announcer: Arc<dyn Announcer>,
    out: W,
}

impl<W: Write> PollLoop<W> {
    pub fn new(
        target: Target,
        settings: Arc<Settings>,
        client: Arc<dyn SiteClient>,
        announcer: Arc<dyn Announcer>,
        out: W,
    ) -> Self {
        let checker = SiteChecker::new(client, settings.probe_timeout);
        Self {
            target,
            settings,
            checker,
            announcer,
            out,
        }
    }

    pub async fn run(mut self) -> io::Result<PollSummary> {
        info!(
            target_site = %self.target,
            interval = ?self.settings.poll_interval,
            timeout = ?self.checker.timeout(),
            announcer = self.announcer.name(),
            run_once = self.settings.run_once,
            "starting site checks"
        );

        let mut checks = 0;
        loop {
            let outcome = self.checker.check(&self.target).await;
            checks += 1;
            self.report(&outcome).await?;

            if decide(&outcome, self.settings.run_once) == Step::Stop {
                debug!(checks, %outcome, "stopping");
                return Ok(PollSummary {
                    checks,
                    last: outcome,
                });
            }

            debug!(wait = ?self.settings.poll_interval, "sleeping until next check");
            sleep(self.settings.poll_interval).await;
        }
    }

    async fn report(&mut self, outcome: &CheckOutcome) -> io::Result<()> {
        let announcement = match outcome {
            CheckOutcome::Up => {
                writeln!(self.out, "[+] site is up")?;
                format!("{} is up.", self.target)
            }
            CheckOutcome::Down(DownReason::Connect(err)) => {
                writeln!(self.out, "[!] fatal connect problem: {}", err)?;
                format!("{} is down.", self.target)
            }
            CheckOutcome::Down(DownReason::Status(_)) => {
                writeln!(self.out, "[!] site is down")?;
                format!("{} is down.", self.target)
            }
            // No site name here.
            CheckOutcome::TimedOut => {
                writeln!(self.out, "[+] request timed out.")?;
                "request timed out.".to_string()
            }
        };
        self.out.flush()?;

        if let Err(e) = self.announcer.announce(&announcement).await {
            warn!(announcer = self.announcer.name(), %e, "announcement failed");
        }
        Ok(())
    }
}
