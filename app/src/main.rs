//! EventEase demo host.
//!
//! Builds the shared managers from the environment and runs a batch of
//! concurrent visitors against them, printing what happened.
//!
//! # Usage
//!
//! ```bash
//! EVENTEASE_SESSION_TIMEOUT_SECS=3600 cargo run --bin eventease -- 12
//! ```

use std::sync::Arc;

use anyhow::Context;
use eventease_app::{AppServices, Config, telemetry, walkthrough};
use eventease_core::environment::SystemClock;
use tracing::info;

const DEFAULT_VISITORS: usize = 9;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("failed to load configuration")?;
    telemetry::init_tracing(&config.telemetry)?;
    info!(?config, "Configuration loaded");

    let visitors = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("visitor count must be a number, got {arg:?}"))?,
        None => DEFAULT_VISITORS,
    };

    let services = AppServices::new(&config, Arc::new(SystemClock));

    println!("Upcoming events:");
    for event in services.catalog.list_upcoming() {
        println!("  {event}");
    }

    let report = walkthrough::run(&services, visitors).await?;
    info!(
        visitors = report.visitors,
        active_sessions = report.active_sessions,
        "Walkthrough finished"
    );

    println!("\n{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
