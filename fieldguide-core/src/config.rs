//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fieldguide.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the fieldguide.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: PathsConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Content root the corpus is scanned from
    pub content: PathBuf,

    /// Curated navigation file; the baked snapshot answers when unset
    #[serde(default)]
    pub navigation: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Content root, resolved relative to the config file
    pub fn content_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.content)
    }

    /// Navigation file, resolved relative to the config file
    pub fn navigation_file(&self) -> Option<PathBuf> {
        self.paths.navigation.as_ref().map(|p| self.resolve_path(p))
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_ref().and_then(|c| c.parent()) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}
