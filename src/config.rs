use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::catalog::ALL_LABEL;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_start_concept")]
    pub start_concept: String,
    #[serde(default)]
    pub shuffle_tiles: bool,
    #[serde(default = "default_show_explanation")]
    pub show_explanation: bool,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_start_concept() -> String {
    ALL_LABEL.to_string()
}
fn default_show_explanation() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            start_concept: default_start_concept(),
            shuffle_tiles: false,
            show_explanation: default_show_explanation(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vakkiyam")
            .join("config.toml")
    }

    /// Validate `start_concept` against the labels actually present in the
    /// loaded catalog, resetting to "All" if stale. Call after the catalog is
    /// loaded; concepts in an old config may have been renamed since.
    pub fn normalize_start_concept(&mut self, labels: &[String]) {
        let known = labels
            .iter()
            .any(|l| l.eq_ignore_ascii_case(&self.start_concept));
        if !known {
            self.start_concept = default_start_concept();
        }
    }
}
