use anyhow::{Context, Result};
use clap::Parser;
use job_board::cli::{handle_command, Cli};
use job_board::core::ConfigManager;
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load()?.with_overrides(cli.overrides());
    config.ensure_directories().await?;

    // JSON log file only when configured; stderr stays human-readable
    let file_layer = match &config.environment.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .with(default_filter())
        .init();

    job_board::app_log!(
        debug,
        "Environment: {}, data: {}, backend: {}",
        config.environment_name,
        config.environment.data_path.display(),
        config.environment.store_backend
    );

    handle_command(cli, &config).await
}
