//! Serving-mode runner: one-shot checkpoint renders and the local HTTP server.

mod checkpoint;
mod page;
mod server;

pub use checkpoint::{snapshot, write_snapshot};
pub use page::{element_id, live_page, snapshot_page};
pub use server::{ServerContext, handle, serve, serve_with_shutdown};

use color_eyre::eyre::{Result, WrapErr, eyre};
use happybird_config::Settings;
use happybird_core::EndpointRegistry;
use happybird_models::ServingMode;
use happybird_ui::HappyBirdWatcher;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Renders a checkpoint snapshot from `settings` and writes it out.
///
/// # Errors
///
/// Fails if rendering or writing the page fails.
pub fn run_checkpoint(settings: &Settings, mode: &ServingMode, output: Option<&Path>) -> Result<()> {
    let registry = EndpointRegistry::from_settings(settings);
    let watcher = HappyBirdWatcher::new(settings.refresh_interval);
    info!("Checkpoint render of {:?} (widget {})", registry.scanner().root(), watcher.id());

    let html = snapshot(&registry, &watcher, mode)?;
    write_snapshot(&html, output)
}

/// Starts the server for a served mode and blocks until Ctrl-C.
///
/// # Errors
///
/// Fails for a non-served mode, an unparsable bind address, or a server error.
pub async fn run_server(settings: &Settings, mode: ServingMode) -> Result<()> {
    if !mode.is_served() {
        return Err(eyre!("mode '{}' cannot be served; use thread or syftbox", mode));
    }

    let addr: SocketAddr = settings
        .bind_address
        .parse()
        .wrap_err_with(|| format!("Invalid bind address '{}'", settings.bind_address))?;

    let registry = EndpointRegistry::from_settings(settings);
    info!("Watching {:?} in {} mode", registry.scanner().root(), mode);

    let ctx = Arc::new(ServerContext::new(
        registry,
        HappyBirdWatcher::new(settings.refresh_interval),
        mode,
    ));
    serve(ctx, addr).await
}
