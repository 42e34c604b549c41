//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::drawer::GestureConfig;
use crate::layout::resolver::default_new_layout_paths;
use crate::layout::shell::DEFAULT_DRAWER_WIDTH;
use crate::layout::storage::DEFAULT_STORAGE_KEY;

const APP_DIR_NAME: &str = "media-shell";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Media server the legacy pages and controllers are fetched from
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Path segments rendered without any shell
    #[serde(default = "default_new_layout_paths")]
    pub new_layout_paths: Vec<String>,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Sidebar width (px) used to offset content while the drawer is open
    #[serde(default = "default_drawer_width")]
    pub drawer_width: f64,

    #[serde(default)]
    pub gesture: GestureConfig,
}

fn default_server_url() -> String {
    "http://localhost:8096".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_drawer_width() -> f64 {
    DEFAULT_DRAWER_WIDTH
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            new_layout_paths: default_new_layout_paths(),
            storage_key: default_storage_key(),
            drawer_width: default_drawer_width(),
            gesture: GestureConfig::default(),
        }
    }
}

impl ShellConfig {
    pub fn server_url(&self) -> Option<url::Url> {
        match url::Url::parse(&self.server_url) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Invalid server_url {:?}: {}", self.server_url, e);
                None
            }
        }
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEDIA_SHELL_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    PathBuf::from(".")
}

/// Load `<config dir>/config.*` overlaid with `MEDIA_SHELL_*` env vars
/// (`MEDIA_SHELL_GESTURE__EDGE_THRESHOLD=32`, ...).
#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<ShellConfig> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        .add_source(
            ::config::Environment::with_prefix("MEDIA_SHELL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("new_layout_paths"),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
