// src/main.rs
use anyhow::Result;
use check_site::announce;
use check_site::cli::{self, Args};
use check_site::health::HttpSiteClient;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the status lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = Arc::new(HttpSiteClient::new()?);

    let code = cli::execute(args, client, announce::from_settings, std::io::stdout()).await?;
    if code != cli::EXIT_OK {
        std::process::exit(code);
    }
    Ok(())
}
