use happybird_models::StatsSummary;
use happybird_utils::{format_bytes, now_timestamp};
use tracing::info;

use crate::Scanner;

/// Derives the stats payload from a fresh scan.
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    scanner: Scanner,
}

impl StatsAggregator {
    #[must_use]
    pub fn new(scanner: Scanner) -> Self {
        Self { scanner }
    }

    #[must_use]
    pub fn stats(&self) -> StatsSummary {
        let scan = self.scanner.scan();
        let summary = StatsSummary::from_scan(&scan, now_timestamp());

        info!(
            "Stats: {} files, {} total, {} owners",
            summary.total_files,
            format_bytes(summary.total_size_bytes),
            summary.unique_owners
        );
        summary
    }
}
