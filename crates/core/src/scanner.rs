use chrono::Local;
use happybird_config::Settings;
use happybird_models::{FileRecord, ScanResult};
use happybird_utils::datetime::system_time_to_datetime;
use happybird_utils::{format_timestamp, now_timestamp};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{PathResolver, ScanError};

/// Knobs for a scan. Defaults match a recursive `**/happybird.txt` glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub target_file: String,
    pub skip_hidden: bool,
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ScanOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            target_file: settings.target_file.clone(),
            skip_hidden: settings.skip_hidden,
            follow_links: settings.follow_links,
        }
    }
}

/// Walks the synchronized folder for target files.
///
/// Holds no state between calls; every [`Scanner::scan`] re-walks the tree.
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    options: ScanOptions,
}

impl Scanner {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    #[must_use]
    pub fn with_options(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_options(PathResolver::resolve(settings), ScanOptions::from(settings))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans the root for target files.
    ///
    /// A missing root yields [`mock_result`]. Files that cannot be inspected are
    /// left out, and a root that cannot be enumerated yields an empty listing.
    #[must_use]
    pub fn scan(&self) -> ScanResult {
        if !self.root.exists() {
            debug!("Scanner: root {:?} does not exist, serving mock data", self.root);
            return mock_result();
        }

        let files = match self.find_matches() {
            Ok(paths) => paths
                .iter()
                .filter_map(|path| match self.record_for(path) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        debug!("Scanner: skipping {}", e);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                warn!("Scanner: {}", e);
                Vec::new()
            }
        };

        let result = ScanResult::new(files, now_timestamp(), Some(self.root.to_string_lossy().into_owned()));
        info!(
            "Scanner: found {} {} file(s) under {:?}",
            result.total_count, self.options.target_file, self.root
        );
        result
    }

    fn find_matches(&self) -> Result<Vec<PathBuf>, ScanError> {
        let skip_hidden = self.options.skip_hidden;
        let walker = WalkDir::new(&self.root)
            .follow_links(self.options.follow_links)
            .into_iter()
            .filter_entry(move |e| e.depth() == 0 || !(skip_hidden && is_hidden(e)));

        let mut matches = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(ScanError::Walk {
                        path: self.root.clone(),
                        source,
                    });
                }
                Err(e) => {
                    debug!("Scanner: skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if self.is_target(&entry) {
                matches.push(entry.into_path());
            }
        }

        Ok(matches)
    }

    fn is_target(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        (file_type.is_file() || file_type.is_symlink()) && entry.file_name() == self.options.target_file.as_str()
    }

    fn record_for(&self, path: &Path) -> Result<FileRecord, ScanError> {
        let metadata = std::fs::metadata(path).map_err(|source| ScanError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(ScanError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let modified = system_time_to_datetime(metadata.modified())
            .map(|dt| dt.with_timezone(&Local))
            .ok_or_else(|| ScanError::Timestamp {
                path: path.to_path_buf(),
            })?;

        Ok(FileRecord::new(
            path.to_string_lossy(),
            format_timestamp(&modified),
            metadata.len(),
            FileRecord::owner_for(&self.root, path),
        ))
    }
}

/// Fixed result served when the synchronized folder does not exist.
#[must_use]
pub fn mock_result() -> ScanResult {
    ScanResult::new(
        vec![
            FileRecord::new("~/SyftBox/alice/happybird.txt", "2024-01-15 10:30:00", 127, "alice"),
            FileRecord::new("~/SyftBox/bob/happybird.txt", "2024-01-15 11:45:00", 89, "bob"),
        ],
        now_timestamp(),
        None,
    )
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
