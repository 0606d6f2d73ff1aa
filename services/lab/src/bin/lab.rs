//! services/lab/src/bin/lab.rs

use lab_lib::{config::Config, console, error::LabError};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LabError> {
    // --- 1. Load Configuration & Set Up Logging ---
    // Logs go to stderr; stdout carries the reply stream.
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Starting lab console...");

    // --- 2. Build the Shared AppState ---
    let state = console::AppState::in_memory(config.clone());
    if let Some(owner_id) = state.seed_owner()? {
        info!(owner_id, auto_login = config.auto_login, "Owner account ready");
    }

    // --- 3. Run the Command Loop ---
    info!("Reading commands from stdin, one JSON object per line");
    console::run(&state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Console closed; all records discarded.");
    Ok(())
}
