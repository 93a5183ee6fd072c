//! CLI configuration management
//!
//! Handle configuration loading and management for the rdbg CLI. The
//! tutorial topic sequence lives here as data: a `[[tutorial_topics]]` table
//! in the config file replaces the built-in walkthrough wholesale.

use anyhow::{bail, Context, Result};
use dirs::home_dir;
use rdbg_client::tutorial::{validate_topics, TutorialTopic};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub prompt: String,
    pub color: bool,
    pub tutorial_topics: Option<Vec<TutorialTopic>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: "rdbg> ".to_string(),
            color: true,
            tutorial_topics: None,
        }
    }
}

impl CliConfig {
    /// Load from the given path, or the default location when none is given.
    /// A missing file is not an error; it means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", config_path.display()))?;

        if let Some(topics) = &config.tutorial_topics {
            if let Err(e) = validate_topics(topics) {
                bail!(
                    "Invalid tutorial_topics in {}: {}",
                    config_path.display(),
                    e
                );
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rdbg")
            .join("cli.toml")
    }
}
