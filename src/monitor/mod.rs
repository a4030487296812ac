// src/monitor/mod.rs
mod poll;

pub use poll::{decide, PollLoop, PollSummary, Step};
