//! Resume parser: heuristic resume parsing, role prediction and JD scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod parsing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{ResumeParserError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use output::{suggested_json_filename, ConsoleFormatter, JsonFormatter, OutputFormatter};
use parsing::jd_matcher::BandedSummary;
use parsing::pipeline::ResumePipeline;
use parsing::taxonomy::RoleTaxonomy;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            resumes,
            job,
            job_text,
            output,
            save,
            banded_summary,
        } => {
            for resume in &resumes {
                cli::validate_file_extension(resume, &["pdf", "txt", "md"])
                    .map_err(|e| ResumeParserError::InvalidInput(format!("Resume file: {}", e)))?;
            }
            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"]).map_err(|e| {
                    ResumeParserError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeParserError::InvalidInput)?;

            let job_description = match (job_text, &job) {
                (Some(text), _) => Some(text),
                (None, Some(path)) => Some(tokio::fs::read_to_string(path).await?),
                (None, None) => None,
            };

            info!("Parsing {} resume(s)", resumes.len());

            let mut pipeline = ResumePipeline::new(RoleTaxonomy::default())?
                .with_preview_chars(config.processing.raw_text_preview_chars);
            if banded_summary {
                pipeline = pipeline.with_summary(Box::new(BandedSummary));
            }
            let pipeline = Arc::new(pipeline);

            let timeout = Duration::from_secs(config.processing.extraction_timeout_secs);
            let progress = batch_progress(resumes.len());

            let results = pipeline
                .parse_batch(
                    &resumes,
                    job_description.as_deref(),
                    timeout,
                    config.processing.max_concurrent_documents,
                )
                .await;
            progress.finish_and_clear();

            let formatter: Box<dyn OutputFormatter> = match output_format {
                OutputFormat::Console => {
                    Box::new(ConsoleFormatter::new(config.output.color_output))
                }
                OutputFormat::Json => Box::new(JsonFormatter::new(config.output.pretty_json)),
            };

            let mut failures = 0usize;
            for (path, result) in &results {
                match result {
                    Ok(parsed) => {
                        println!("{}", formatter.format(parsed)?);

                        if let Some(dir) = &save {
                            tokio::fs::create_dir_all(dir).await?;
                            let target = dir.join(suggested_json_filename(parsed));
                            let json = JsonFormatter::new(true).format(parsed)?;
                            tokio::fs::write(&target, json).await?;
                            info!("Saved {}", target.display());
                        }
                    }
                    Err(e) => {
                        failures += 1;
                        error!("{}: {}", path.display(), e);
                    }
                }
            }

            if failures == results.len() && !results.is_empty() {
                return Err(ResumeParserError::UnreadableDocument(
                    "No resume could be parsed".to_string(),
                ));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!(
                    "Extraction timeout:    {}s",
                    config.processing.extraction_timeout_secs
                );
                println!(
                    "Concurrent documents:  {}",
                    config.processing.max_concurrent_documents
                );
                println!(
                    "Raw text preview:      {} chars",
                    config.processing.raw_text_preview_chars
                );
                println!("Output format:         {:?}", config.output.format);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn batch_progress(total: usize) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message(format!("Parsing {} resume(s)...", total));
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
