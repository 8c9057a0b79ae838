use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voy_core::calendar::Language;
use voy_core::moderation::DEFAULT_MASK;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VoyConfig {
    pub log: LogSection,
    pub moderation: ModerationSection,
    pub calendar: CalendarSection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSection {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub filter: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModerationSection {
    pub mask: String,
    /// Appended to the built-in lexicon
    pub extra_terms: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalendarSection {
    /// Language of holiday names in text output
    pub language: Language,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Default for ModerationSection {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK.to_string(),
            extra_terms: Vec::new(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<VoyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read `path`, or fall back to defaults when no file exists there.
pub fn load_config(path: &Path) -> anyhow::Result<VoyConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(VoyConfig::default())
    }
}

pub fn write_config(path: &Path, config: &VoyConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("voy"));
        }
    }
    Ok(home_dir()?.join(".config").join("voy"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
