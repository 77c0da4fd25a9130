//! Match report assembled from one analysis for presentation and export

use crate::config::KeywordStrategy;
use crate::processing::analyzer::{AnalysisOutcome, DegenerateInput};
use crate::processing::document::truncate_text;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FULL_COVERAGE_MESSAGE: &str = "No major missing keywords detected!";

/// General advice shown with every report.
pub const GENERAL_SUGGESTIONS: [&str; 3] = [
    "Consider adding action verbs to your resume.",
    "Ensure all required skills are listed.",
    "Tailor your resume based on the job description.",
];

/// How many missing keywords a suggestion names before summarizing.
const SUGGESTED_KEYWORD_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub summary: MatchSummary,
    pub keywords: KeywordReport,
    pub previews: DocumentPreviews,
    pub suggestions: Vec<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Match score rounded to two decimals (0-100)
    pub score: f64,
    pub level: MatchLevel,
    pub verdict: String,
    /// Set when a document had no content after normalization
    pub degenerate: Option<DegenerateInput>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Excellent,
    VeryGood,
    Good,
    Fair,
    BelowAverage,
    Poor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub resume_keywords: Vec<String>,
    pub job_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Share of job description keywords found in the resume (0-100)
    pub coverage_percentage: f64,
    pub coverage_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPreviews {
    pub resume: String,
    pub job_description: String,
    pub normalized_resume: String,
    pub normalized_job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub resume_file: Option<String>,
    pub job_file: Option<String>,
    pub keyword_strategy: KeywordStrategy,
    pub processing_time_ms: u64,
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => MatchLevel::Excellent,
            s if s >= 80.0 => MatchLevel::VeryGood,
            s if s >= 70.0 => MatchLevel::Good,
            s if s >= 60.0 => MatchLevel::Fair,
            s if s >= 50.0 => MatchLevel::BelowAverage,
            _ => MatchLevel::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::Excellent => "EXCELLENT",
            MatchLevel::VeryGood => "VERY GOOD",
            MatchLevel::Good => "GOOD",
            MatchLevel::Fair => "FAIR",
            MatchLevel::BelowAverage => "BELOW AVG",
            MatchLevel::Poor => "POOR",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent match - strong candidate for this role",
            MatchLevel::VeryGood => "Very good match - minor improvements could help",
            MatchLevel::Good => "Good match - some targeted improvements recommended",
            MatchLevel::Fair => "Fair match - several improvements needed",
            MatchLevel::BelowAverage => "Below average match - significant improvements required",
            MatchLevel::Poor => "Poor match - major revisions needed",
        }
    }
}

impl MatchReport {
    /// Build a report, previewing the first `preview_chars` characters of each document.
    pub fn from_outcome(outcome: &AnalysisOutcome, preview_chars: usize) -> Self {
        Self {
            summary: Self::create_summary(outcome),
            keywords: Self::create_keyword_report(outcome),
            previews: DocumentPreviews {
                resume: truncate_text(&outcome.resume.document.text, preview_chars),
                job_description: truncate_text(
                    &outcome.job_description.document.text,
                    preview_chars,
                ),
                normalized_resume: truncate_text(
                    &outcome.resume.normalized.as_text(),
                    preview_chars,
                ),
                normalized_job_description: truncate_text(
                    &outcome.job_description.normalized.as_text(),
                    preview_chars,
                ),
            },
            suggestions: Self::create_suggestions(outcome),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: outcome.resume.document.source.clone(),
                job_file: outcome.job_description.document.source.clone(),
                keyword_strategy: outcome.strategy,
                processing_time_ms: outcome.processing_time_ms,
            },
        }
    }

    pub fn has_full_coverage(&self) -> bool {
        self.keywords.missing_keywords.is_empty()
    }

    fn create_summary(outcome: &AnalysisOutcome) -> MatchSummary {
        let score = round_to_hundredths(outcome.result.score());
        let level = MatchLevel::from_score(score);
        let verdict = match outcome.result.degenerate() {
            Some(kind) => format!("No meaningful comparison possible: {}", kind),
            None => level.verdict().to_string(),
        };

        MatchSummary {
            score,
            level,
            verdict,
            degenerate: outcome.result.degenerate(),
        }
    }

    fn create_keyword_report(outcome: &AnalysisOutcome) -> KeywordReport {
        let resume = &outcome.resume.keywords;
        let job = &outcome.job_description.keywords;
        let missing = outcome.result.missing_keywords();

        let matched: Vec<String> = job
            .iter()
            .filter(|k| resume.contains(k))
            .map(str::to_string)
            .collect();
        let coverage_percentage = if job.is_empty() {
            100.0
        } else {
            round_to_hundredths(matched.len() as f64 / job.len() as f64 * 100.0)
        };
        let coverage_message = if missing.is_empty() {
            FULL_COVERAGE_MESSAGE.to_string()
        } else {
            format!(
                "{} of {} job description keywords are missing from the resume",
                missing.len(),
                job.len()
            )
        };

        KeywordReport {
            resume_keywords: resume.to_vec(),
            job_keywords: job.to_vec(),
            matched_keywords: matched,
            missing_keywords: missing.to_vec(),
            coverage_percentage,
            coverage_message,
        }
    }

    fn create_suggestions(outcome: &AnalysisOutcome) -> Vec<String> {
        let mut suggestions: Vec<String> =
            GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()).collect();

        let missing = outcome.result.missing_keywords();
        if !missing.is_empty() {
            let named: Vec<&str> = missing.iter().take(SUGGESTED_KEYWORD_LIMIT).collect();
            let rest = missing.len().saturating_sub(named.len());
            let mut suggestion = format!(
                "Work these job description keywords into your resume where they apply: {}",
                named.join(", ")
            );
            if rest > 0 {
                suggestion.push_str(&format!(" (and {} more)", rest));
            }
            suggestions.push(suggestion);
        }

        match outcome.result.degenerate() {
            Some(DegenerateInput::EmptyResume) | Some(DegenerateInput::BothEmpty) => {
                suggestions.push(
                    "The resume produced no content words; check that the file contains readable text."
                        .to_string(),
                );
            }
            Some(DegenerateInput::EmptyJobDescription) => {
                suggestions.push(
                    "The job description produced no content words; check that the file contains readable text."
                        .to_string(),
                );
            }
            None => {}
        }

        suggestions
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NlpConfig;
    use crate::processing::analyzer::MatchAnalyzer;
    use crate::processing::document::Document;

    fn outcome(resume: &str, job: &str) -> AnalysisOutcome {
        MatchAnalyzer::from_config(&NlpConfig::default())
            .unwrap()
            .analyze_documents(
                Document::resume(resume).with_source("resume.txt"),
                Document::job_description(job).with_source("job.txt"),
            )
    }

    #[test]
    fn test_match_levels() {
        assert_eq!(MatchLevel::from_score(100.0), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(85.5), MatchLevel::VeryGood);
        assert_eq!(MatchLevel::from_score(59.99), MatchLevel::BelowAverage);
        assert_eq!(MatchLevel::from_score(0.0), MatchLevel::Poor);
    }

    #[test]
    fn test_report_for_partial_match() {
        let report = MatchReport::from_outcome(
            &outcome(
                "Experienced software engineer skilled in Python and cloud systems.",
                "Looking for a software engineer with Python and AWS experience.",
            ),
            500,
        );

        assert!(report.keywords.missing_keywords.contains(&"aws".to_string()));
        assert!(report.keywords.matched_keywords.contains(&"python".to_string()));
        assert!(!report.has_full_coverage());
        assert_eq!(report.suggestions.len(), 4);
        assert!(report.suggestions[3].contains("aws"));
        assert_eq!(report.metadata.resume_file.as_deref(), Some("resume.txt"));
        assert_eq!(report.summary.score, (report.summary.score * 100.0).round() / 100.0);
    }

    #[test]
    fn test_full_coverage_message() {
        let text = "Rust engineer with Kubernetes experience.";
        let report = MatchReport::from_outcome(&outcome(text, text), 500);
        assert_eq!(report.summary.score, 100.0);
        assert_eq!(report.summary.level, MatchLevel::Excellent);
        assert_eq!(report.keywords.coverage_message, FULL_COVERAGE_MESSAGE);
        assert_eq!(report.keywords.coverage_percentage, 100.0);
        assert_eq!(report.suggestions.len(), GENERAL_SUGGESTIONS.len());
    }

    #[test]
    fn test_previews_are_truncated() {
        let long_resume = "Rust engineer. ".repeat(100);
        let report = MatchReport::from_outcome(&outcome(&long_resume, "Rust engineer"), 40);
        assert!(report.previews.resume.ends_with("..."));
        assert!(report.previews.resume.chars().count() <= 43);
        assert_eq!(report.previews.job_description, "Rust engineer");
    }

    #[test]
    fn test_degenerate_report() {
        let report = MatchReport::from_outcome(&outcome("the and of", "Rust engineer"), 500);
        assert_eq!(report.summary.score, 0.0);
        assert_eq!(report.summary.degenerate, Some(DegenerateInput::EmptyResume));
        assert!(report.summary.verdict.starts_with("No meaningful comparison"));
        assert!(report.suggestions.iter().any(|s| s.contains("resume produced no content")));
    }
}
