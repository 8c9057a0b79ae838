//! Path resolution for the config file.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolve the config file path: `--config` / `VOY_CONFIG`, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.config {
        Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
        _ => default_config_path(),
    }
}

/// Hint shown when a config file was expected at `path` but is missing.
pub fn missing_config_hint(path: &Path) -> String {
    format!(
        "Run `voy config init` to create {}, or point VOY_CONFIG at an existing file.",
        path.display()
    )
}
