use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ScanResult;

/// Payload of the stats endpoint. A pure derived view of a [`ScanResult`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub unique_owners: usize,
    /// Distinct owners. Emitted sorted so output is stable.
    pub owners_list: Vec<String>,
    pub average_size: f64,
    pub last_updated: String,
}

impl StatsSummary {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_scan(scan: &ScanResult, last_updated: impl Into<String>) -> Self {
        let total_files = scan.files.len();
        let total_size_bytes: u64 = scan.files.iter().map(|f| f.size).sum();

        let owners: BTreeSet<&str> = scan.files.iter().map(|f| f.owner.as_str()).collect();
        let owners_list: Vec<String> = owners.into_iter().map(str::to_string).collect();

        let average_size = if total_files > 0 {
            total_size_bytes as f64 / total_files as f64
        } else {
            0.0
        };

        Self {
            total_files,
            total_size_bytes,
            unique_owners: owners_list.len(),
            owners_list,
            average_size,
            last_updated: last_updated.into(),
        }
    }
}
