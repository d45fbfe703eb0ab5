//! CLI interface for the resume parser

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Heuristic resume parsing, role prediction and JD scoring")]
#[command(
    long_about = "Extract contact details, skills and links from resumes, rank them against a fixed role taxonomy, and score them against an optional job description"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one or more resumes
    Parse {
        /// Paths to resume files (PDF, TXT, MD)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Path to a job description file (TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Inline job description text (overrides --job)
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Directory to save per-resume JSON files into
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Use the score-conditioned match summary instead of the fixed one
        #[arg(long)]
        banded_summary: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
