use color_eyre::eyre::Result;
use happybird_core::EndpointRegistry;
use happybird_models::ServingMode;
use happybird_ui::HappyBirdWatcher;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::page;

/// Calls the widget's endpoints once and renders a static page from the result.
///
/// # Errors
///
/// Fails if an endpoint payload cannot be serialized.
pub fn snapshot(registry: &EndpointRegistry, watcher: &HappyBirdWatcher, mode: &ServingMode) -> Result<String> {
    let data = registry.fetch(watcher.endpoints())?;
    let body = watcher.render_content(&data, mode);
    Ok(page::snapshot_page(watcher, &body))
}

/// Writes `html` to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn write_snapshot(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, html)?;
            info!("Snapshot written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
