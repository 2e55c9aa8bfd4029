use color_eyre::Result;
use tempfile::TempDir;

use happybird::config::Settings;
use happybird::core::{PathResolver, ScanOptions, Scanner};

use crate::create_happybird;

#[test]
fn test_nested_tree_owners_and_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_happybird(root, "carol/happybird.txt", 42, 7200)?;
    create_happybird(root, "dave/happybird.txt", 10, 60)?;
    create_happybird(root, "erin/projects/deep/happybird.txt", 5, 3600)?;
    create_happybird(root, "happybird.txt", 1, 86_400)?;
    create_happybird(root, "frank/notes.txt", 99, 10)?;
    create_happybird(root, "frank/HappyBird.txt", 99, 10)?;

    let result = Scanner::new(root).scan();

    assert_eq!(result.total_count, 4);
    let owners: Vec<&str> = result.files.iter().map(|f| f.owner.as_str()).collect();
    assert_eq!(owners, ["dave", "erin", "carol", "unknown"]);
    assert!(result.files.windows(2).all(|w| w[0].modified >= w[1].modified));
    Ok(())
}

#[test]
fn test_hidden_directories_follow_settings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_happybird(root, "alice/happybird.txt", 3, 10)?;
    create_happybird(root, ".trash/alice/happybird.txt", 3, 10)?;

    let settings = Settings {
        syftbox_path: Some(root.to_path_buf()),
        ..Settings::default()
    };
    assert_eq!(Scanner::from_settings(&settings).scan().total_count, 1);

    let settings = Settings {
        skip_hidden: false,
        ..settings
    };
    assert_eq!(Scanner::from_settings(&settings).scan().total_count, 2);
    Ok(())
}

#[test]
fn test_custom_target_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_happybird(root, "alice/happybird.txt", 3, 10)?;
    create_happybird(root, "alice/sadbird.txt", 4, 10)?;

    let options = ScanOptions {
        target_file: "sadbird.txt".to_string(),
        ..ScanOptions::default()
    };
    let result = Scanner::with_options(root, options).scan();

    assert_eq!(result.total_count, 1);
    assert_eq!(result.files[0].size, 4);
    Ok(())
}

#[test]
fn test_resolver_prefers_configured_root() {
    let settings = Settings {
        syftbox_path: Some("/srv/syftbox".into()),
        ..Settings::default()
    };
    assert_eq!(PathResolver::resolve(&settings), std::path::PathBuf::from("/srv/syftbox"));

    let default_root = PathResolver::resolve(&Settings::default());
    assert!(default_root.ends_with("SyftBox"));
}

#[test]
fn test_missing_root_serves_mock_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = Scanner::new(temp_dir.path().join("nope")).scan();

    assert!(result.is_mock());
    assert_eq!(result.total_count, 2);
    let mut owners: Vec<&str> = result.files.iter().map(|f| f.owner.as_str()).collect();
    owners.sort_unstable();
    assert_eq!(owners, ["alice", "bob"]);

    let json = serde_json::to_value(&result)?;
    assert!(json.get("syftbox_path").is_none());
    Ok(())
}
