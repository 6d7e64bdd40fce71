//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, modes, output_formats, timeouts};
use crate::core::error::{AfuzzError, Result};
use crate::core::types::Mode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timeout in seconds for each HTTP request
    pub timeout: Option<u64>,

    /// Scheduling mode (sequential, bounded-parallel, sync, async)
    pub mode: Option<String>,

    /// Maximum number of in-flight requests in bounded-parallel mode
    pub concurrency: Option<usize>,

    /// Marker in the base URL replaced by each candidate
    pub placeholder: Option<String>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Keep blank wordlist lines as empty candidates instead of skipping them
    pub keep_blank_lines: Option<bool>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            mode: Some(modes::DEFAULT.to_string()),
            concurrency: Some(defaults::CONCURRENCY),
            placeholder: Some(defaults::PLACEHOLDER.to_string()),
            user_agent: None,
            keep_blank_lines: Some(false), // Blank lines are skipped by default
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults for missing keys
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AfuzzError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            AfuzzError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Candidate config file paths: the working directory, then up to
    /// three parent directories.
    pub fn standard_locations() -> Vec<PathBuf> {
        (0..=defaults::CONFIG_SEARCH_DEPTH)
            .map(|depth| {
                PathBuf::from(format!(
                    "{}{}",
                    "../".repeat(depth),
                    defaults::CONFIG_FILE_NAME
                ))
            })
            .collect()
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::standard_locations()
            .into_iter()
            .find_map(|path| Self::load_from_file(path).ok())
            .unwrap_or_default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref mode) = cli_config.mode {
            self.mode = Some(mode.clone());
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref placeholder) = cli_config.placeholder {
            self.placeholder = Some(placeholder.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.keep_blank_lines {
            self.keep_blank_lines = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Scheduling mode, falling back to sequential for unknown names.
    ///
    /// Unknown names are rejected by [`Config::validate`].
    pub fn mode(&self) -> Mode {
        self.mode
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency.unwrap_or(defaults::CONCURRENCY)
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(defaults::PLACEHOLDER)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn keep_blank_lines(&self) -> bool {
        self.keep_blank_lines.unwrap_or(false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(AfuzzError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(AfuzzError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(AfuzzError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > defaults::MAX_CONCURRENCY {
                return Err(AfuzzError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may exhaust open sockets. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref mode) = self.mode
            && mode.parse::<Mode>().is_err()
        {
            return Err(AfuzzError::Config(format!(
                "Invalid mode '{mode}'. Expected one of: {}.",
                modes::ALL.join(", ")
            )));
        }

        if let Some(ref placeholder) = self.placeholder
            && placeholder.is_empty()
        {
            return Err(AfuzzError::Config(
                "Placeholder cannot be empty.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(AfuzzError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Core options
    pub timeout: Option<u64>,        // --timeout
    pub mode: Option<String>,        // --mode
    pub concurrency: Option<usize>,  // --concurrency
    pub placeholder: Option<String>, // --placeholder

    // Input & output
    pub keep_blank_lines: bool,        // --keep-blank-lines
    pub force: bool,                   // --force
    pub output_format: Option<String>, // --format

    // Verbosity
    pub quiet: bool,       // --quiet
    pub verbose: bool,     // --verbose
    pub no_progress: bool, // --no-progress

    // Network
    pub user_agent: Option<String>, // --user-agent

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
