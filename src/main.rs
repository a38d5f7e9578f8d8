//! Resume screener: resume information extraction and job matching engine

mod cli;
mod config;
mod error;
mod input;
mod jobs;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ScreenerError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::formatter_for;
use processing::extractor::Extractor;
use processing::screener::ScreeningEngine;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resume,
            jobs,
            detailed,
            output,
            save,
        } => {
            for path in &resume {
                cli::validate_file_extension(path, &["pdf", "doc", "docx", "txt"])
                    .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            }
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Job store file: {}", e)))?;

            let output_format = resolve_output_format(output.as_deref(), &config)?;

            let postings = jobs::active_jobs(jobs::load_jobs(&jobs)?);
            info!("Loaded {} active job postings", postings.len());

            let engine = Arc::new(ScreeningEngine::new(&config, postings)?);

            // Each document is independent: decode and screen concurrently,
            // one task per file.
            let mut handles = Vec::with_capacity(resume.len());
            for path in resume {
                let engine = Arc::clone(&engine);
                handles.push(tokio::spawn(async move {
                    screen_one(engine, path).await
                }));
            }

            let mut rendered = Vec::new();
            let formatter = formatter_for(
                &output_format,
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                config.matching.max_displayed_matches,
            );

            for handle in handles {
                let report = handle
                    .await
                    .map_err(|e| ScreenerError::TextProcessing(format!("Screening task failed: {}", e)))??;
                rendered.push(formatter.format_report(&report)?);
            }

            let combined = rendered.join("\n");
            match save {
                Some(path) => {
                    tokio::fs::write(&path, &combined).await?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", combined),
            }
        }

        Commands::Extract { resume, output } => {
            cli::validate_file_extension(&resume, &["pdf", "doc", "docx", "txt"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format = resolve_output_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&resume).await?;

            let extractor = Extractor::new()?;
            let attributes = extractor.extract(&text);

            match output_format {
                config::OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&attributes)?)
                }
                _ => {
                    println!("Name:       {}", attributes.name);
                    println!("Email:      {}", attributes.email);
                    println!("Phone:      {}", attributes.phone);
                    println!("Location:   {}", attributes.location);
                    println!("Experience: {} years", attributes.experience_years);
                    println!("Education:  {}", attributes.education);
                    println!("Skills:     {}", attributes.skills.join(", "));
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("{}", toml::to_string_pretty(&config).map_err(|e| {
                    ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
                })?);
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

fn resolve_output_format(
    flag: Option<&str>,
    config: &Config,
) -> Result<config::OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(ScreenerError::InvalidInput),
        None => Ok(config.output.format.clone()),
    }
}

async fn screen_one(
    engine: Arc<ScreeningEngine>,
    path: PathBuf,
) -> Result<output::report::ScreeningReport> {
    let mut input_manager = InputManager::new();
    let text = input_manager.extract_text(&path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());
    Ok(engine.screen(&text, &file_name))
}
