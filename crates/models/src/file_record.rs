use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Owner label used when a match sits directly in the scanned root.
pub const UNKNOWN_OWNER: &str = "unknown";

/// One discovered `happybird.txt` file.
///
/// Records are produced fresh on every scan and never mutated afterwards. The
/// owner is derived from the directory layout and is not authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    #[serde(default)]
    pub path: String,
    /// Local modification time formatted as `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default = "default_owner")]
    pub owner: String,
}

fn default_owner() -> String {
    UNKNOWN_OWNER.to_string()
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<String>, modified: impl Into<String>, size: u64, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        Self {
            path: path.into(),
            modified: modified.into(),
            size,
            owner: if owner.is_empty() { default_owner() } else { owner },
        }
    }

    /// Derives the owner label for `path` relative to `root`.
    ///
    /// The owner is the first component of the relative path when the file lives
    /// in a subdirectory, otherwise [`UNKNOWN_OWNER`].
    #[must_use]
    pub fn owner_for(root: &Path, path: &Path) -> String {
        let Ok(relative) = path.strip_prefix(root) else {
            return default_owner();
        };

        let mut components = relative.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(first)), Some(_)) => {
                let owner = first.to_string_lossy();
                if owner.is_empty() {
                    default_owner()
                } else {
                    owner.into_owned()
                }
            }
            _ => default_owner(),
        }
    }
}
