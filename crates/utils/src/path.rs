use std::path::PathBuf;

/// Name of the synchronized folder under the user's home directory.
pub const SYFTBOX_DIR_NAME: &str = "SyftBox";

/// `<home>/SyftBox` for the current user.
///
/// Returns `None` when the home directory cannot be determined.
#[must_use]
pub fn default_syftbox_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SYFTBOX_DIR_NAME))
}
