//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Resume information extraction and job matching engine")]
#[command(
    long_about = "Extract candidate attributes (name, contact, experience, education, skills) from resume documents and rank open job postings by skill overlap"
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
    /// Extract candidate attributes and rank jobs by fit
    Screen {
        /// Path to one or more resume files (PDF, DOC, DOCX, TXT)
        #[arg(short, long, required = true, num_args = 1..)]
        resume: Vec<PathBuf>,

        /// Path to a JSON file holding the job postings
        #[arg(short, long)]
        jobs: PathBuf,

        /// Include near-miss skills and per-match skill lists
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to configuration)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file instead of stdout
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Extract candidate attributes from a resume without matching
    Extract {
        /// Path to the resume file (PDF, DOC, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown (defaults to configuration)
        #[arg(short, long)]
        output: Option<String>,
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
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
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
