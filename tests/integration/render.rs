use color_eyre::Result;
use tempfile::TempDir;

use happybird::core::{EndpointRegistry, Scanner};
use happybird::models::ServingMode;
use happybird::ui::{EMPTY_STATE_MESSAGE, HappyBirdWatcher, WidgetId};

use crate::create_happybird;

fn watcher() -> HappyBirdWatcher {
    HappyBirdWatcher::with_id(WidgetId::from_raw("itest").unwrap(), 5)
}

#[test]
fn test_render_from_fetched_endpoints() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_happybird(temp_dir.path(), "carol/happybird.txt", 42, 3600)?;
    create_happybird(temp_dir.path(), "dave/happybird.txt", 10, 60)?;

    let registry = EndpointRegistry::new(Scanner::new(temp_dir.path()));
    let watcher = watcher();
    let data = registry.fetch(watcher.endpoints())?;
    let html = watcher.render_content(&data, &ServingMode::Thread);

    assert!(html.contains("Found 2 happybird.txt files"));
    assert!(html.contains("Auto-refreshing every 5 seconds"));
    let dave = html.find("🐦 dave").unwrap();
    let carol = html.find("🐦 carol").unwrap();
    assert!(dave < carol);
    assert!(html.contains("Size: 42 bytes"));
    Ok(())
}

#[test]
fn test_empty_tree_renders_placeholder() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = EndpointRegistry::new(Scanner::new(temp_dir.path()));
    let watcher = watcher();

    let html = watcher.render_data(&registry.widget_data(), &ServingMode::Checkpoint);
    assert!(html.contains(EMPTY_STATE_MESSAGE));
    assert!(html.contains("Found 0 happybird.txt files"));
    Ok(())
}

#[test]
fn test_badges_per_mode() {
    let watcher = watcher();
    let data = happybird::models::WidgetData::default();

    let cases = [
        (ServingMode::Checkpoint, "📁 Checkpoint", "#6c757d"),
        (ServingMode::Thread, "🧵 Thread Server", "#28a745"),
        (ServingMode::SyftBox, "📦 SyftBox", "#007bff"),
        (ServingMode::from_tag("jupyter"), "jupyter", "#6c757d"),
    ];
    for (mode, label, color) in cases {
        let html = watcher.render_data(&data, &mode);
        assert!(html.contains(&format!("background: {color};\">{label}</div>")), "badge for {mode}");
    }
}

#[test]
fn test_update_script_targets_same_handler() {
    let watcher = watcher();
    let script = watcher.update_script();

    assert!(script.contains("element.innerHTML"));
    assert!(script.contains("currentServerType"));
    assert!(script.contains("window.selectHappyBirdFile_itest = function (filepath)"));
}
