use anyhow::{anyhow, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and defaulting the conversion settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the org source documents
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Directory the MDX documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Root directory relocated images are copied under
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,

    /// Extension of the files to convert
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of the converted files
    #[serde(default = "default_target_extension")]
    pub target_extension: String,

    /// Extra `#` added to every heading
    #[serde(default)]
    pub heading_offset: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Deepest heading level markdown supports
const MAX_HEADING_OFFSET: usize = 5;

fn default_source_dir() -> String {
    "org".to_string()
}

fn default_output_dir() -> String {
    "src/content/blog/".to_string()
}

fn default_asset_prefix() -> String {
    crate::conversion::DEFAULT_ASSET_PREFIX.to_string()
}

fn default_source_extension() -> String {
    "org".to_string()
}

fn default_target_extension() -> String {
    "mdx".to_string()
}

impl Config {
    /// Load a configuration file, or fall back to defaults when it does not exist.
    ///
    /// Nothing is written when the file is missing.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(path)
            .map_err(|e| AppError::File(format!("Failed to open config file {:?}: {}", path, e)))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("source_dir", &self.source_dir),
            ("output_dir", &self.output_dir),
            ("asset_prefix", &self.asset_prefix),
            ("source_extension", &self.source_extension),
            ("target_extension", &self.target_extension),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(anyhow!("Configuration value '{}' must not be empty", name));
            }
        }

        if self.heading_offset > MAX_HEADING_OFFSET {
            return Err(anyhow!(
                "heading_offset must be at most {}, got {}",
                MAX_HEADING_OFFSET,
                self.heading_offset
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            asset_prefix: default_asset_prefix(),
            source_extension: default_source_extension(),
            target_extension: default_target_extension(),
            heading_offset: 0,
            log_level: LogLevel::default(),
        }
    }
}
