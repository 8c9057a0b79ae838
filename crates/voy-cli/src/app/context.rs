//! Application context for the VOY CLI.
//!
//! Provides a unified context that combines CLI arguments with lazily-loaded
//! configuration and the session's field cipher.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use voy_core::calendar::Language;
use voy_core::{FieldCipher, Moderator};

use crate::cli::Cli;
use crate::config::{load_config, VoyConfig, DEFAULT_LOG_FILTER};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::resolve_config_path;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<VoyConfig>,
    moderator: OnceCell<Moderator>,
    cipher: FieldCipher,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            moderator: OnceCell::new(),
            cipher: FieldCipher::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli)
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing file yields the defaults.
    pub fn config(&self) -> anyhow::Result<&VoyConfig> {
        self.config
            .get_or_try_init(|| load_config(&self.config_path()?))
    }

    /// Filter for the log subscriber; unreadable config falls back to the default.
    pub fn log_filter(&self) -> String {
        self.config()
            .map(|config| config.log.filter.clone())
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    }

    /// Language for holiday names in text output.
    pub fn language(&self) -> anyhow::Result<Language> {
        Ok(self.config()?.calendar.language)
    }

    /// Moderator over the built-in lexicon plus configured extra terms.
    pub fn moderator(&self) -> anyhow::Result<&Moderator> {
        self.moderator.get_or_try_init(|| {
            let section = &self.config()?.moderation;
            let moderator = Moderator::with_extra_terms(&section.extra_terms)
                .map_err(CliError::from)?
                .with_mask(section.mask.clone());
            tracing::debug!(
                terms = moderator.terms().count(),
                "Loaded moderation lexicon"
            );
            Ok(moderator)
        })
    }

    pub fn cipher(&self) -> &FieldCipher {
        &self.cipher
    }

    /// UI context for this run; `json` is the command's `--json` flag.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.plain, self.cli.no_color, self.cli.ascii)
    }

    /// End the session: drop every derived key.
    pub fn logout(&self) {
        self.cipher.logout();
    }
}
