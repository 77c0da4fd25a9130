//! Output formatters: colored console, JSON, Markdown and plain text

use crate::config::{KeywordStrategy, OutputFormat};
use crate::error::Result;
use crate::output::report::{MatchLevel, MatchReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Plain text formatter for exported feedback reports
pub struct TextFormatter {
    include_previews: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    text_formatter: TextFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, level: MatchLevel) -> String {
        let color = match level {
            MatchLevel::Excellent => Color::Green,
            MatchLevel::VeryGood => Color::BrightGreen,
            MatchLevel::Good => Color::Yellow,
            MatchLevel::Fair => Color::BrightYellow,
            MatchLevel::BelowAverage => Color::Red,
            MatchLevel::Poor => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", level.label().color(color).bold())
        } else {
            format!("[{}]", level.label())
        }
    }

    fn format_keyword_list(&self, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return self.colorize("(none)", Color::BrightBlack);
        }
        keywords
            .iter()
            .map(|k| self.colorize(k, color))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!(
            "Match Score: {:.2}/100 {}\n",
            report.summary.score,
            self.format_score_badge(report.summary.level)
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));

        output.push_str(&self.format_header("🔍 Keywords", 2));
        output.push_str(&format!(
            "Resume Keywords: {}\n",
            self.format_keyword_list(&report.keywords.resume_keywords, Color::White)
        ));
        output.push_str(&format!(
            "Job Description Keywords: {}\n",
            self.format_keyword_list(&report.keywords.job_keywords, Color::White)
        ));

        output.push_str(&self.format_header("💡 Feedback & Suggestions", 2));
        if report.has_full_coverage() {
            output.push_str(&format!(
                "✅ {}\n",
                self.colorize(&report.keywords.coverage_message, Color::Green)
            ));
        } else {
            output.push_str(&format!(
                "Missing Keywords: {}\n",
                self.format_keyword_list(&report.keywords.missing_keywords, Color::Red)
            ));
            output.push_str(&format!(
                "Keyword coverage: {:.1}% ({})\n",
                report.keywords.coverage_percentage, report.keywords.coverage_message
            ));
        }

        output.push_str(&self.format_header("Suggestions for Improvement", 3));
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }

        if self.detailed {
            output.push_str(&self.format_header("📄 Document Previews", 2));
            output.push_str(&format!(
                "{}\n{}\n\n",
                self.colorize("Resume Preview:", Color::Cyan),
                report.previews.resume
            ));
            output.push_str(&format!(
                "{}\n{}\n",
                self.colorize("Job Description Preview:", Color::Cyan),
                report.previews.job_description
            ));

            output.push_str(&self.format_header("Normalized Text", 3));
            output.push_str(&format!("Resume: {}\n", report.previews.normalized_resume));
            output.push_str(&format!(
                "Job Description: {}\n",
                report.previews.normalized_job_description
            ));

            output.push_str(&self.format_header("Matched Keywords", 3));
            output.push_str(&format!(
                "{}\n",
                self.format_keyword_list(&report.keywords.matched_keywords, Color::Green)
            ));
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Matcher v{} | Keyword strategy: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.matcher_version,
            strategy_name(report.metadata.keyword_strategy)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(level: MatchLevel) -> &'static str {
        match level {
            MatchLevel::Excellent => "🟢 Excellent",
            MatchLevel::VeryGood => "🟡 Very Good",
            MatchLevel::Good => "🟠 Good",
            MatchLevel::Fair => "🔴 Fair",
            MatchLevel::BelowAverage => "🔴 Below Average",
            MatchLevel::Poor => "🔴 Poor",
        }
    }

    fn code_list(keywords: &[String]) -> String {
        if keywords.is_empty() {
            "_none_".to_string()
        } else {
            format!("`{}`", keywords.join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            if let (Some(resume), Some(job)) =
                (&report.metadata.resume_file, &report.metadata.job_file)
            {
                output.push_str(&format!("**Resume:** `{}` | **Job:** `{}`\n", resume, job));
            }
            output.push('\n');
        }

        output.push_str("## Match Score\n\n");
        output.push_str(&format!(
            "**Match Score:** {:.2}/100 {}\n\n",
            report.summary.score,
            Self::markdown_score_badge(report.summary.level)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        output.push_str("## 🔍 Keywords\n\n");
        output.push_str("| | Keywords |\n");
        output.push_str("|---|---|\n");
        output.push_str(&format!(
            "| Resume | {} |\n",
            Self::code_list(&report.keywords.resume_keywords)
        ));
        output.push_str(&format!(
            "| Job Description | {} |\n",
            Self::code_list(&report.keywords.job_keywords)
        ));
        output.push_str(&format!(
            "| Matched | {} |\n\n",
            Self::code_list(&report.keywords.matched_keywords)
        ));

        output.push_str("## 💡 Feedback & Suggestions\n\n");
        if report.has_full_coverage() {
            output.push_str(&format!("✅ {}\n\n", report.keywords.coverage_message));
        } else {
            output.push_str(&format!(
                "**Missing Keywords:** {}\n\n",
                Self::code_list(&report.keywords.missing_keywords)
            ));
            output.push_str(&format!(
                "**Keyword Coverage:** {:.1}%\n\n",
                report.keywords.coverage_percentage
            ));
        }

        output.push_str("### Suggestions for Improvement\n\n");
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }
        output.push('\n');

        output.push_str("## 📄 Previews\n\n");
        output.push_str(&format!(
            "### Resume\n\n```\n{}\n```\n\n",
            report.previews.resume
        ));
        output.push_str(&format!(
            "### Job Description\n\n```\n{}\n```\n\n",
            report.previews.job_description
        ));

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Matcher v{} using {} keywords*\n",
                report.metadata.matcher_version,
                strategy_name(report.metadata.keyword_strategy)
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl TextFormatter {
    pub fn new(include_previews: bool) -> Self {
        Self { include_previews }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut lines = vec![
            "Resume Match Feedback Report".to_string(),
            "=".repeat(28),
            format!(
                "Generated: {}",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        ];
        if let Some(resume) = &report.metadata.resume_file {
            lines.push(format!("Resume: {}", resume));
        }
        if let Some(job) = &report.metadata.job_file {
            lines.push(format!("Job Description: {}", job));
        }

        lines.push(String::new());
        lines.push(format!("Match Score: {:.2}/100", report.summary.score));
        lines.push(format!("Verdict: {}", report.summary.verdict));
        lines.push(String::new());
        lines.push(format!(
            "Resume Keywords: {}",
            report.keywords.resume_keywords.join(", ")
        ));
        lines.push(format!(
            "Job Description Keywords: {}",
            report.keywords.job_keywords.join(", ")
        ));
        if report.has_full_coverage() {
            lines.push(report.keywords.coverage_message.clone());
        } else {
            lines.push(format!(
                "Missing Keywords: {}",
                report.keywords.missing_keywords.join(", ")
            ));
        }

        lines.push(String::new());
        lines.push("Suggestions for Improvement:".to_string());
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, suggestion));
        }

        if self.include_previews {
            lines.push(String::new());
            lines.push("Resume Preview:".to_string());
            lines.push(report.previews.resume.clone());
            lines.push(String::new());
            lines.push("Job Description Preview:".to_string());
            lines.push(report.previews.job_description.clone());
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            text_formatter: TextFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            text_formatter: TextFormatter::new(detailed),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Text => self.text_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn strategy_name(strategy: KeywordStrategy) -> &'static str {
    match strategy {
        KeywordStrategy::PartOfSpeech => "part-of-speech",
        KeywordStrategy::SkillEntity => "skill entity",
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console | OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_match{}.{}", base_name, timestamp_suffix, extension)
}
