use serde::{Deserialize, Serialize};

use crate::FileRecord;

/// Payload of the files endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResult {
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub last_scan: String,
    /// Resolved root. Absent for mock results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syftbox_path: Option<String>,
}

impl ScanResult {
    /// Builds a result with `files` ordered newest first and `total_count` in sync.
    #[must_use]
    pub fn new(mut files: Vec<FileRecord>, last_scan: impl Into<String>, syftbox_path: Option<String>) -> Self {
        sort_newest_first(&mut files);
        Self {
            total_count: files.len(),
            files,
            last_scan: last_scan.into(),
            syftbox_path,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.syftbox_path.is_none()
    }
}

/// Sorts descending by the formatted modification string.
///
/// The fixed `YYYY-MM-DD HH:MM:SS` format makes lexicographic order chronological.
fn sort_newest_first(files: &mut [FileRecord]) {
    files.sort_by(|a, b| b.modified.cmp(&a.modified));
}
