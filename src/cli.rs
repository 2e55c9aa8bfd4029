use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use happybird_config::Settings;
use happybird_core::EndpointRegistry;
use happybird_models::{Endpoint, ServingMode};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "happybird")]
#[command(about = "Watch a SyftBox folder tree for happybird.txt files", long_about = None)]
pub struct Cli {
    /// Scan this directory instead of <home>/SyftBox.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Load settings from this TOML file instead of the user config directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the files endpoint payload.
    Files,

    /// Print the content endpoint payload.
    Content,

    /// Print the stats endpoint payload.
    Stats,

    /// Render the widget once as a standalone HTML page.
    Render {
        /// Serving-mode tag shown in the badge.
        #[arg(long, value_name = "TAG")]
        mode: Option<ServingMode>,
        /// Write the page here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Serve the endpoints and a live page over HTTP.
    Serve {
        /// Serving mode shown in the badge. Defaults to the configured mode, or thread.
        #[arg(long, value_parser = ["thread", "syftbox"])]
        mode: Option<String>,
        /// Address to listen on, e.g. 127.0.0.1:8765.
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

impl Cli {
    /// Loads settings and applies the global overrides.
    ///
    /// # Errors
    ///
    /// Fails if a settings file exists but cannot be loaded.
    pub async fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path).await?,
            None => Settings::load().await?,
        };
        if let Some(root) = &self.root {
            settings.syftbox_path = Some(root.clone());
        }
        debug!("Effective settings: {:?}", settings);
        Ok(settings)
    }

    /// # Errors
    ///
    /// Propagates failures from settings loading and the selected command.
    pub async fn run(self) -> Result<()> {
        let mut settings = self.settings().await?;

        match self.command {
            Command::Files => print_endpoint(&settings, Endpoint::Files).await?,
            Command::Content => print_endpoint(&settings, Endpoint::Content).await?,
            Command::Stats => print_endpoint(&settings, Endpoint::Stats).await?,
            Command::Render { mode, output } => {
                let mode = mode.unwrap_or_else(|| settings.serving_mode.clone());
                tokio::task::spawn_blocking(move || {
                    happybird_app::run_checkpoint(&settings, &mode, output.as_deref())
                })
                .await??;
            }
            Command::Serve { mode, bind } => {
                if let Some(bind) = bind {
                    settings.bind_address = bind;
                }
                let mode = serve_mode(mode.as_deref(), &settings.serving_mode);
                happybird_app::run_server(&settings, mode).await?;
            }
        }

        Ok(())
    }
}

/// The flag wins; otherwise the configured mode if it can be served, else thread.
fn serve_mode(flag: Option<&str>, configured: &ServingMode) -> ServingMode {
    match flag {
        Some(tag) => ServingMode::from_tag(tag),
        None if configured.is_served() => configured.clone(),
        None => ServingMode::Thread,
    }
}

async fn print_endpoint(settings: &Settings, endpoint: Endpoint) -> Result<()> {
    let registry = EndpointRegistry::from_settings(settings);
    let value = tokio::task::spawn_blocking(move || registry.call(endpoint)).await??;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
