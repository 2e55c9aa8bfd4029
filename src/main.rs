use clap::Parser;
use color_eyre::eyre::Result;
use std::{env, fs, path::PathBuf};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::Cli;

const DEFAULT_FILTER: &str = "happybird=debug,info";

#[tokio::main]
async fn main() -> Result<()> {
    // Install error hooks
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging();

    if let Err(e) = cli.run().await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let log_dir = env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("happybird.log");

    let log_file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;
    Ok((log_file, log_path))
}

/// Logs to `<cwd>/logs/happybird.log`, or to stderr if that file cannot be opened.
fn setup_logging() {
    match open_log_file() {
        Ok((log_file, log_path)) => {
            eprintln!("Logging to: {}", log_path.display());

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_ansi(false)
                .with_env_filter(env_filter())
                .with_target(true)
                .with_line_number(true)
                .with_thread_ids(false)
                .init();

            tracing::info!("Starting HappyBird Watcher...");
            tracing::info!("Log file: {}", log_path.display());
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter())
                .with_target(true)
                .init();

            tracing::warn!("Could not open log file ({}), logging to stderr", e);
        }
    }
}
