//! Resume matcher: score a resume against a job description

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, KeywordStrategy, OutputFormat};
use resume_matcher::input::{FileType, InputManager};
use resume_matcher::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_matcher::output::report::MatchReport;
use resume_matcher::output::session_log::{SessionEntry, SessionLog};
use resume_matcher::processing::lexicon::LanguageModel;
use resume_matcher::processing::{DocumentRole, MatchAnalyzer, Normalizer};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> resume_matcher::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// The model backs every analysis; failing to load it ends the process.
fn load_model(config: &Config) -> Arc<LanguageModel> {
    match LanguageModel::from_config(&config.nlp) {
        Ok(model) => {
            info!("Loaded language model '{}'", model.name());
            Arc::new(model)
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_override: Option<PathBuf>,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            strategy,
            session_log,
        } => {
            let model = load_model(&config);

            let allowed = FileType::supported_extensions();
            cli::validate_file_extension(&resume, allowed)
                .map_err(|e| anyhow!("Resume file: {}", e))?;
            cli::validate_file_extension(&job, allowed)
                .map_err(|e| anyhow!("Job description file: {}", e))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };
            let strategy = resolve_strategy(strategy.as_deref(), &config)?;
            let detailed = detailed || config.output.detailed;
            let chatty = output_format == OutputFormat::Console;

            if chatty {
                println!("🚀 Resume match analysis");
                println!("📄 Resume: {}", resume.display());
                println!("💼 Job Description: {}", job.display());
            }

            let mut input_manager = InputManager::new();
            let resume_doc = input_manager
                .load_document(&resume, DocumentRole::Resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_doc = input_manager
                .load_document(&job, DocumentRole::JobDescription)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;

            let analyzer = MatchAnalyzer::new(Normalizer::new(model, strategy)?);
            let outcome = analyzer.analyze_documents(resume_doc, job_doc);
            let report = MatchReport::from_outcome(&outcome, config.output.preview_chars);

            let generator = ReportGenerator::with_options(config.output.color_output, detailed, true);
            println!("{}", generator.generate_report(&report, output_format)?);

            if let Some(save_path) = save {
                // Console output carries color codes, exports get the plain text report
                let save_format = match output_format {
                    OutputFormat::Console => OutputFormat::Text,
                    other => other,
                };
                let target = if save_path.is_dir() {
                    save_path.join(suggest_filename(
                        save_format,
                        &resume.to_string_lossy(),
                        true,
                    ))
                } else {
                    save_path
                };
                let content = ReportGenerator::with_options(false, true, true)
                    .generate_report(&report, save_format)?;
                save_report_to_file(&content, &target)
                    .with_context(|| format!("Failed to save report to {}", target.display()))?;
                if chatty {
                    println!("💾 Report saved to {}", target.display());
                }
            }

            if let Some(log_path) = session_log.or_else(|| config.output.session_log.clone()) {
                SessionLog::new(&log_path)
                    .append(&SessionEntry::from(&report))
                    .with_context(|| format!("Failed to write session log {}", log_path.display()))?;
                info!("Recorded session in {}", log_path.display());
            }
        }

        Commands::Inspect { file, strategy } => {
            let model = load_model(&config);

            cli::validate_file_extension(&file, FileType::supported_extensions())
                .map_err(anyhow::Error::msg)?;
            let strategy = resolve_strategy(strategy.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let document = input_manager
                .load_document(&file, DocumentRole::Resume)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let analyzer = MatchAnalyzer::new(Normalizer::new(model, strategy)?);
            let analysis = analyzer.inspect(document);

            println!("🔎 {}", file.display());
            println!(
                "Words: {} | Characters: {} | Lemmas: {}",
                analysis.document.word_count(),
                analysis.document.character_count(),
                analysis.normalized.len()
            );
            println!("\nNormalized text:\n{}", analysis.normalized);
            println!(
                "\nKeywords ({}):\n{}",
                analysis.keywords.len(),
                analysis.keywords.to_vec().join(", ")
            );
        }

        Commands::Config { action } => {
            let config_path = config_override.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    let rendered = toml::to_string_pretty(&config)
                        .context("Failed to render configuration")?;
                    println!("{}", rendered);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&config_path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
        }
    }

    Ok(())
}

fn resolve_strategy(flag: Option<&str>, config: &Config) -> anyhow::Result<KeywordStrategy> {
    match flag {
        Some(value) => cli::parse_keyword_strategy(value).map_err(anyhow::Error::msg),
        None => Ok(config.nlp.keyword_strategy),
    }
}
