use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::ui::card::{DEFAULT_MAPS_URL, DEFAULT_PLACEHOLDER_IMAGE};

const APP_DIR_NAME: &str = ".venue_chat";
const DATA_DIR_NAME: &str = "data";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the chat service; requests go to `{endpoint}/api/chat`
    pub endpoint: String,
    /// Where history, saved venues and the theme flag are kept
    pub data_dir: Option<String>,
    pub placeholder_image: String,
    /// Directions link prefix; the encoded address is appended
    pub maps_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            data_dir: None,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            maps_url: DEFAULT_MAPS_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn load_with(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(explicit)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let value: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config TOML at {}", path.display()))?;
        Ok(value)
    }

    pub fn save_with(&self, explicit: Option<&Path>) -> Result<()> {
        let path = resolve_config_path(explicit)?;
        let content = toml::to_string_pretty(self)?;
        crate::utils::io::write_string(&path, &content)
            .with_context(|| format!("Failed to write config at {}", path.display()))
    }

    pub fn init(force: bool, explicit: Option<&Path>) -> Result<PathBuf> {
        let path = resolve_config_path(explicit)?;
        if path.exists() && !force {
            anyhow::bail!("Config already exists at {} (use --force to overwrite)", path.display());
        }
        Self::default().save_with(explicit)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => self.endpoint = value.to_owned(),
            "data-dir" | "data_dir" => self.data_dir = Some(value.to_owned()),
            "placeholder-image" | "placeholder_image" => self.placeholder_image = value.to_owned(),
            "maps-url" | "maps_url" => self.maps_url = value.to_owned(),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir_path(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Ok(config_dir_path()?.join(DATA_DIR_NAME)),
        }
    }
}

fn config_dir_path() -> Result<PathBuf> {
    let home = home_dir().context("Cannot resolve home directory")?;
    Ok(home.join(APP_DIR_NAME))
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit { return Ok(p.to_path_buf()); }
    Ok(config_dir_path()?.join(CONFIG_FILE_NAME))
}
