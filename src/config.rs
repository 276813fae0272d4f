//! Configuration management for driftcheck
//!
//! This module provides the configuration for a check run, loaded from
//! environment variables with sensible defaults. Configuration covers which
//! files count as templates, which directories are skipped, which port
//! numbers are considered "should be parameterized", and the traversal bounds.
//!
//! # Environment Variables
//!
//! - `DRIFTCHECK_LOG_LEVEL`: Logging level - default: "warn"
//! - `DRIFTCHECK_MAX_FILES`: Maximum files scanned per run - default: "5000"
//! - `DRIFTCHECK_MAX_DEPTH`: Maximum directory depth - default: "16"
//!
//! # Example
//!
//! ```
//! use driftcheck::config::CheckConfig;
//!
//! let config = CheckConfig::from_env().expect("Invalid configuration");
//! config.validate().expect("Invalid configuration");
//! assert!(config.hardcoded_ports.contains(&5432));
//! ```

use std::env;
use thiserror::Error;

/// Default values for configuration
const DEFAULT_MAX_FILES: usize = 5000;
const DEFAULT_MAX_DEPTH: usize = 16;

/// Number of example locations reported per hardcoded port
pub const DEFAULT_MAX_EXAMPLES: usize = 5;

/// File extensions recognized as template/config files
const TEMPLATE_EXTENSIONS: &[&str] = &[
    "yaml",
    "yml",
    "tpl",
    "tmpl",
    "j2",
    "conf",
    "properties",
    "env",
    "ini",
    "toml",
];

/// Well-known port numbers that should come from a shared variable
const WELL_KNOWN_PORTS: &[u16] = &[80, 443, 3306, 5432, 6379, 8080, 8443, 9090, 9092, 27017, 5672];

/// Directories never descended into
const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", ".git", "vendor", "dist"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

/// Configuration for a single check run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Extensions treated as template/config files
    pub template_extensions: Vec<String>,
    /// Ports flagged when found as bare literals
    pub hardcoded_ports: Vec<u16>,
    /// Directories excluded from traversal
    pub excluded_dirs: Vec<String>,
    /// Example locations reported per flagged port
    pub max_examples_per_port: usize,
    /// Upper bound on files scanned
    pub max_files: usize,
    /// Upper bound on traversal depth
    pub max_depth: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            template_extensions: TEMPLATE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            hardcoded_ports: WELL_KNOWN_PORTS.to_vec(),
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            max_examples_per_port: DEFAULT_MAX_EXAMPLES,
            max_files: DEFAULT_MAX_FILES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CheckConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = env::var("DRIFTCHECK_MAX_FILES") {
            config.max_files = parse_usize("DRIFTCHECK_MAX_FILES", &value)?;
        }

        if let Ok(value) = env::var("DRIFTCHECK_MAX_DEPTH") {
            config.max_depth = parse_usize("DRIFTCHECK_MAX_DEPTH", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_files == 0 {
            return Err(ConfigError::Validation(
                "max_files must be greater than zero".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be greater than zero".to_string(),
            ));
        }
        if self.template_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "at least one template extension is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true when the filename counts as a template/config file.
    ///
    /// Matches by extension, plus dotenv-style names (`.env`, `.env.example`)
    /// which have no extension in the `Path::extension` sense.
    pub fn is_template_file(&self, filename: &str) -> bool {
        if filename == ".env" || filename.starts_with(".env.") {
            return true;
        }
        match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                self.template_extensions.iter().any(|e| e == ext)
            }
            _ => false,
        }
    }
}

fn parse_usize(var: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: "expected a positive integer".to_string(),
        })
}
