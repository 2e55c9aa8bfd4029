#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)] // For comparing floats in tests
#![allow(clippy::panic)]
use color_eyre::Result;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use happybird::{
    app::{ServerContext, run_checkpoint, serve_with_shutdown},
    config::Settings,
    core::EndpointRegistry,
    models::{ScanResult, ServingMode, StatsSummary},
    ui::HappyBirdWatcher,
};

/// Helper to create a SyftBox-like tree with a few users
async fn setup_syftbox(root: &Path) -> Result<()> {
    let files = [
        ("alice/happybird.txt", "first chirp"),
        ("bob/happybird.txt", "tweet"),
        ("bob/apps/feed/happybird.txt", "nested"),
        ("carol/notes.txt", "not a bird"),
        (".cache/alice/happybird.txt", "hidden copy"),
    ];
    for (rel, content) in files {
        let path = root.join(rel);
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;
        tokio::fs::write(&path, content).await?;
    }
    Ok(())
}

/// Minimal HTTP/1.1 GET returning (status line, body).
async fn http_get(addr: std::net::SocketAddr, path: &str) -> Result<(String, String)> {
    let mut stream = TcpStream::connect(addr).await?;
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await?;
    let raw = String::from_utf8(raw)?;

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status = head.lines().next().unwrap().to_string();
    Ok((status, body.to_string()))
}

#[tokio::test]
async fn test_config_to_checkpoint_workflow() -> Result<()> {
    // 1. Setup tree and persist settings
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("SyftBox");
    setup_syftbox(&root).await?;

    let config_path = temp_dir.path().join("config/happybird/config.toml");
    let settings = Settings {
        syftbox_path: Some(root.clone()),
        refresh_interval: 30,
        ..Settings::default()
    };
    settings.save_to(&config_path)?;

    // 2. Reload and verify
    let loaded = Settings::load_from(&config_path).await?;
    assert_eq!(loaded, settings);

    // 3. Render a checkpoint page
    let output = temp_dir.path().join("out/widget.html");
    run_checkpoint(&loaded, &ServingMode::Checkpoint, Some(&output))?;
    let html = tokio::fs::read_to_string(&output).await?;

    assert!(html.contains("Found 3 happybird.txt files"));
    assert!(html.contains("Auto-refreshing every 30 seconds"));
    assert!(html.contains("📁 Checkpoint"));
    assert!(!html.contains(".cache"));
    assert_eq!(html.matches("🐦 bob").count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_served_endpoints_workflow() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("SyftBox");
    setup_syftbox(&root).await?;

    let settings = Settings {
        syftbox_path: Some(root.clone()),
        ..Settings::default()
    };
    let ctx = Arc::new(ServerContext::new(
        EndpointRegistry::from_settings(&settings),
        HappyBirdWatcher::new(settings.refresh_interval),
        ServingMode::SyftBox,
    ));

    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_with_shutdown(ctx, listener, async {
        let _ = stop_rx.await;
    }));

    // Files
    let (status, body) = http_get(addr, "/api/happybird/files").await?;
    assert!(status.contains("200"));
    let files: ScanResult = serde_json::from_str(&body)?;
    assert_eq!(files.total_count, 3);
    assert!(files.files.iter().all(|f| f.owner == "alice" || f.owner == "bob"));

    // Stats
    let (_, body) = http_get(addr, "/api/happybird/stats").await?;
    let stats: StatsSummary = serde_json::from_str(&body)?;
    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.unique_owners, 2);
    assert_eq!(stats.total_size_bytes, 22);

    // New file shows up on the next call
    tokio::fs::create_dir_all(root.join("dave")).await?;
    tokio::fs::write(root.join("dave/happybird.txt"), "late").await?;
    let (_, body) = http_get(addr, "/api/happybird/files").await?;
    let files: ScanResult = serde_json::from_str(&body)?;
    assert_eq!(files.total_count, 4);

    // Page
    let (status, body) = http_get(addr, "/").await?;
    assert!(status.contains("200"));
    assert!(body.contains("📦 SyftBox"));
    assert!(body.contains("Found 4 happybird.txt files"));

    // Errors
    let (status, _) = http_get(addr, "/api/happybird/missing").await?;
    assert!(status.contains("404"));

    stop_tx.send(()).unwrap();
    server.await??;
    Ok(())
}
