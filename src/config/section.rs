//! `[output]` and `[log]` sections.
//!
//! # Example
//!
//! ```toml
//! [output]
//! format = "json"   # text | json
//! pretty = true     # indent json output
//!
//! [log]
//! verbose = false   # print resolver decisions to stderr
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Indent JSON output. Ignored for text.
    pub pretty: bool,
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults() {
        let config: OutputConfig = toml::from_str("").unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.pretty);
    }

    #[test]
    fn test_output_format_lowercase() {
        let config: OutputConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(toml::from_str::<OutputConfig>("format = \"JSON\"").is_err());
    }
}
