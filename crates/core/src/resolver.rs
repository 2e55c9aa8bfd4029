use happybird_config::Settings;
use happybird_utils::{SYFTBOX_DIR_NAME, default_syftbox_path};
use std::path::PathBuf;

/// Computes the root directory to scan.
pub struct PathResolver;

impl PathResolver {
    /// The configured override, else `<home>/SyftBox`.
    ///
    /// Without a home directory this yields the literal `~/SyftBox`, which does
    /// not exist and so sends the scanner to its mock data.
    #[must_use]
    pub fn resolve(settings: &Settings) -> PathBuf {
        settings
            .syftbox_path
            .clone()
            .or_else(default_syftbox_path)
            .unwrap_or_else(|| PathBuf::from("~").join(SYFTBOX_DIR_NAME))
    }
}
