use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default title shown above the listing.
pub const DEFAULT_APP_NAME: &str = "Horse Videos";

/// Global configuration loaded from `~/.config/vidcat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Title printed above `vidcat list`.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Optional database location; if missing, `~/.local/state/vidcat/videos.db` is used.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// How many characters of the notes `vidcat show` prints.
    #[serde(default = "default_notes_preview_chars")]
    pub notes_preview_chars: usize,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_notes_preview_chars() -> usize {
    200
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            database_path: None,
            notes_preview_chars: default_notes_preview_chars(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidcat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CatalogConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CatalogConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CatalogConfig = toml::from_str(&data)?;
    Ok(cfg)
}
