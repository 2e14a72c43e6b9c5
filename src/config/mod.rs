//! Configuration for `trr-routes.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [output], [log]
//! ├── error      # ConfigError
//! └── mod.rs     # RoutesConfig (this file)
//! ```
//!
//! The file is optional. Without one every setting has its default, and
//! command-line flags always override what the file says.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{LogConfig, OutputConfig, OutputFormat};

use crate::cli::Cli;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use trr_routes::{debug, log};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "trr-routes.toml";

/// Root configuration structure representing trr-routes.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Result formatting
    pub output: OutputConfig,

    /// Diagnostics
    pub log: LogConfig,
}

impl RoutesConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist; the default file may be absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_cli(cli);
        Ok(config)
    }

    /// Command-line flags win over file values.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if cli.pretty {
            self.output.pretty = true;
        }
        if cli.verbose {
            self.log.verbose = true;
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        debug!("config"; "loaded {}", path.display());

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}
