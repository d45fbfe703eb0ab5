//! Configuration management for the resume parser

use crate::error::{ResumeParserError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Upper bound on a single document's text extraction, in seconds.
    /// Extraction is the only step touching external I/O.
    pub extraction_timeout_secs: u64,
    /// Number of documents processed in parallel in a batch.
    pub max_concurrent_documents: usize,
    /// Length of the "Raw Text" preview carried on the parsed record.
    pub raw_text_preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                extraction_timeout_secs: 30,
                max_concurrent_documents: 4,
                raw_text_preview_chars: 500,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeParserError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeParserError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-parser")
            .join("config.toml")
    }
}
