//! Valentine planner - terminal invitation and date picker

use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use valentine_planner::config::PickerConfig;
use valentine_planner::runtime::spawn_session;
use valentine_planner::state_machine::PickerContext;
use valentine_planner::submit::{HttpSubmissionSink, LoggingSink};
use valentine_planner::tui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let config = PickerConfig::from_env();

    // Initialize logging; the terminal belongs to the UI, so logs go to a file
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valentine_planner=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    let catalog = Arc::new(config.load_catalog()?);
    if config.endpoint_configured() {
        tracing::info!("Submission endpoint configured");
    } else {
        tracing::warn!(
            "VALENTINE_SUBMIT_URL is not set; submissions will report an error"
        );
    }

    let sink = LoggingSink::new(HttpSubmissionSink::new(config.submit_url.clone())?);
    let context = PickerContext::new(Arc::clone(&catalog), config.endpoint_configured());
    let handle = spawn_session(context, sink);

    tracing::info!(
        log_file = %config.log_file.display(),
        "Starting valentine planner"
    );

    tokio::task::spawn_blocking(move || tui::run(&catalog, &handle)).await??;

    tracing::info!("Valentine planner closed");
    Ok(())
}
