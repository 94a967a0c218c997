use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::validation::TimecodeValidatorConfig;

/// Application configuration module
/// This module handles loading and validating the optional JSON
/// configuration file. Command-line flags override its values.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Extension given to files converted from JSON, without the dot
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Log a warning for cues that overlap the previous cue
    #[serde(default = "default_true")]
    pub warn_on_overlap: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_output_extension() -> String {
    "vtt".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.validate()
            .context("Configuration validation failed")?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let ext = &self.output_extension;
        if ext.is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }
        if ext.contains(['.', '/', '\\']) {
            return Err(anyhow!("Output extension must be a bare extension, got: {}", ext));
        }
        if ext.eq_ignore_ascii_case("json") {
            return Err(anyhow!("Output extension must differ from the JSON input extension"));
        }

        Ok(())
    }

    /// Timecode settings derived from this configuration
    pub fn timecode_config(&self) -> TimecodeValidatorConfig {
        TimecodeValidatorConfig {
            check_overlaps: self.warn_on_overlap,
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            output_extension: default_output_extension(),
            warn_on_overlap: true,
        }
    }
}
