//! CLI interface for the resume matcher

use crate::config::{KeywordStrategy, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Score a resume against a job description and list missing keywords")]
#[command(long_about = "Compare a resume with a job description using TF-IDF similarity over lemmatized text, and report the job description keywords the resume does not mention")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, text
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include previews, normalized text and matched keywords
        #[arg(short, long)]
        detailed: bool,

        /// Keyword strategy: pos, skill
        #[arg(long)]
        strategy: Option<String>,

        /// Append the result to a JSON-lines session log
        #[arg(long)]
        session_log: Option<PathBuf>,
    },

    /// Show the normalized text and keywords of a single document
    Inspect {
        /// Path to the document (PDF, DOCX, TXT, MD)
        file: PathBuf,

        /// Keyword strategy: pos, skill
        #[arg(long)]
        strategy: Option<String>,
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

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "text" | "txt" => Ok(OutputFormat::Text),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, text",
            format
        )),
    }
}

/// Parse and validate keyword strategy
pub fn parse_keyword_strategy(strategy: &str) -> Result<KeywordStrategy, String> {
    match strategy.to_lowercase().as_str() {
        "pos" | "part-of-speech" => Ok(KeywordStrategy::PartOfSpeech),
        "skill" | "skills" | "skill-entity" => Ok(KeywordStrategy::SkillEntity),
        _ => Err(format!(
            "Invalid keyword strategy: {}. Supported: pos, skill",
            strategy
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_parse_keyword_strategy() {
        assert_eq!(
            parse_keyword_strategy("pos").unwrap(),
            KeywordStrategy::PartOfSpeech
        );
        assert_eq!(
            parse_keyword_strategy("Skill").unwrap(),
            KeywordStrategy::SkillEntity
        );
        assert!(parse_keyword_strategy("ner").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("resume.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.doc"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("resume"), &allowed).is_err());
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "analyze",
            "--resume",
            "cv.pdf",
            "--job",
            "job.txt",
            "--strategy",
            "skill",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze {
                resume, strategy, ..
            } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(strategy.as_deref(), Some("skill"));
            }
            _ => panic!("expected analyze"),
        }
    }
}
