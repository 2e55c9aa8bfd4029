use color_eyre::eyre::{Result, bail, eyre};
use happybird_models::ServingMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "happybird";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Overrides `<home>/SyftBox` as the scanned root.
    #[serde(default)]
    pub syftbox_path: Option<PathBuf>,
    #[serde(default = "default_target_file")]
    pub target_file: String,
    /// Seconds between host refreshes. Display text only.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,
    /// Descend into symlinked directories. Loops are detected and skipped.
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub serving_mode: ServingMode,
}

// Default value functions for serde
fn default_target_file() -> String {
    "happybird.txt".to_string()
}
fn default_refresh_interval() -> u64 {
    5
}
fn default_skip_hidden() -> bool {
    true
}
fn default_follow_links() -> bool {
    true
}
fn default_bind_address() -> String {
    "127.0.0.1:8765".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            syftbox_path: None,
            target_file: default_target_file(),
            refresh_interval: default_refresh_interval(),
            skip_hidden: default_skip_hidden(),
            follow_links: default_follow_links(),
            bind_address: default_bind_address(),
            serving_mode: ServingMode::default(),
        }
    }
}

impl Settings {
    /// Loads settings from the user config directory, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read, parsed or validated.
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path).await
        } else {
            debug!("No config at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Loads settings from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or holds
    /// invalid values.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Writes the settings as pretty TOML to the user config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// # Errors
    ///
    /// Returns an error if the parent directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval == 0 {
            bail!("refresh_interval must be at least 1 second");
        }
        if self.target_file.is_empty() || self.target_file.contains(['/', '\\']) {
            bail!("target_file must be a bare file name, got {:?}", self.target_file);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }
}
