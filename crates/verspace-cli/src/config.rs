//! Configuration management for the Verspace CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use verspace::prelude::DEFAULT_POSITIVE_LABEL;

pub const CONFIG_FILE: &str = "verspace.toml";
pub const DATA_DIR: &str = ".verspace";

/// Verspace project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub learner: LearnerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Class value learned as the positive concept.
    #[serde(default = "default_positive_label")]
    pub positive_label: String,
    /// Class value printed for negative predictions.
    #[serde(default = "default_negative_label")]
    pub negative_label: String,
    /// Class attribute name; the last attribute when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_attribute: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print S and G before and after every example.
    #[serde(default)]
    pub trace: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

// Default value functions
fn default_positive_label() -> String { DEFAULT_POSITIVE_LABEL.to_string() }
fn default_negative_label() -> String { "no".to_string() }
fn default_color() -> bool { true }

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            positive_label: default_positive_label(),
            negative_label: default_negative_label(),
            class_attribute: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trace: false,
            color: default_color(),
        }
    }
}

impl Config {
    /// Load config from verspace.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find verspace.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Get the Verspace data directory (.verspace/).
pub fn data_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(DATA_DIR))
}

/// Get the saved model path.
pub fn current_model_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("current.json"))
}
