// src/lib.rs
pub mod announce;
pub mod cli;
pub mod config;
pub mod health;
pub mod monitor;
