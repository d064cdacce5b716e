//! Configuration file support for fzpick.
//!
//! Configuration is loaded from `~/.config/fzpick/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/fzpick/config.toml
//! finder = "fzf-tmux"
//! default_options = ["--reverse", "--height=50%"]
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

use crate::options::Options;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Finder executable to invoke
    pub finder: Option<String>,

    /// Flags passed to the finder on every invocation, verbatim
    #[serde(default)]
    pub default_options: Vec<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fzpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, finder: Option<String>) -> Self {
        if finder.is_some() {
            self.finder = finder;
        }
        self
    }

    /// Get the finder executable, falling back to environment variable or
    /// the stock `fzf`.
    pub fn finder(&self) -> String {
        self.finder
            .clone()
            .or_else(|| std::env::var("FZPICK_FINDER").ok())
            .unwrap_or_else(|| "fzf".to_string())
    }

    /// Default options as an [`Options`] value, in file order.
    pub fn default_options(&self) -> Options {
        let mut opts = Options::new();
        for arg in &self.default_options {
            opts = opts.raw(arg.clone());
        }
        opts
    }
}
