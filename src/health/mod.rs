// src/health/mod.rs
mod checker;
mod client;
mod outcome;

pub use checker::SiteChecker;
pub use client::{HttpSiteClient, ProbeError, SiteClient};
pub use outcome::{CheckOutcome, DownReason};
