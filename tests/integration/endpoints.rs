use color_eyre::Result;
use tempfile::TempDir;

use happybird::core::{EndpointError, EndpointRegistry, Scanner, StatsAggregator};
use happybird::models::{Endpoint, ScanResult, StatsSummary};

use crate::create_happybird;

fn carol_and_dave() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    create_happybird(temp_dir.path(), "carol/happybird.txt", 42, 3600)?;
    create_happybird(temp_dir.path(), "dave/happybird.txt", 10, 60)?;
    Ok(temp_dir)
}

#[test]
fn test_files_endpoint_orders_newest_first() -> Result<()> {
    let temp_dir = carol_and_dave()?;
    let registry = EndpointRegistry::new(Scanner::new(temp_dir.path()));

    let result: ScanResult = serde_json::from_value(registry.call(Endpoint::Files)?)?;
    assert_eq!(result.total_count, 2);
    assert_eq!(result.files[0].owner, "dave");
    assert_eq!(result.files[1].owner, "carol");
    let expected = temp_dir.path().to_string_lossy().into_owned();
    assert_eq!(result.syftbox_path, Some(expected));
    Ok(())
}

#[test]
fn test_stats_endpoint_aggregates() -> Result<()> {
    let temp_dir = carol_and_dave()?;
    let registry = EndpointRegistry::new(Scanner::new(temp_dir.path()));

    let stats: StatsSummary = serde_json::from_value(registry.call_path("/api/happybird/stats")?)?;
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_size_bytes, 52);
    assert_eq!(stats.unique_owners, 2);
    assert_eq!(stats.owners_list, ["carol", "dave"]);
    assert_eq!(stats.average_size, 26.0);
    assert!(!stats.last_updated.is_empty());
    Ok(())
}

#[test]
fn test_stats_for_empty_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir_all(temp_dir.path().join("alice"))?;

    let stats = StatsAggregator::new(Scanner::new(temp_dir.path())).stats();
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.average_size, 0.0);
    assert!(stats.owners_list.is_empty());
    Ok(())
}

#[test]
fn test_stats_over_mock_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let stats = StatsAggregator::new(Scanner::new(temp_dir.path().join("missing"))).stats();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_size_bytes, 127 + 89);
    assert_eq!(stats.owners_list, ["alice", "bob"]);
    assert_eq!(stats.average_size, 108.0);
    Ok(())
}

#[test]
fn test_every_registered_path_dispatches() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = EndpointRegistry::new(Scanner::new(temp_dir.path()));

    for endpoint in Endpoint::ALL {
        assert!(registry.call_path(endpoint.path())?.is_object());
    }
    assert!(matches!(
        registry.call_path("/api/happybird"),
        Err(EndpointError::UnknownEndpoint(_))
    ));
    Ok(())
}

#[test]
fn test_scans_are_not_cached() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = EndpointRegistry::new(Scanner::new(temp_dir.path()));
    assert_eq!(registry.files().total_count, 0);

    create_happybird(temp_dir.path(), "alice/happybird.txt", 1, 0)?;
    assert_eq!(registry.files().total_count, 1);
    Ok(())
}
