//! Analysis orchestration: normalization, keyword extraction, scoring and gap

use crate::config::{KeywordStrategy, NlpConfig};
use crate::error::Result;
use crate::processing::document::{Document, DocumentRole, KeywordSet, NormalizedText};
use crate::processing::normalizer::Normalizer;
use crate::processing::similarity::{missing_keywords, SimilarityEngine};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Which side of the comparison had nothing left after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    EmptyResume,
    EmptyJobDescription,
    BothEmpty,
}

impl DegenerateInput {
    fn detect(resume: &NormalizedText, job_description: &NormalizedText) -> Option<Self> {
        match (resume.is_empty(), job_description.is_empty()) {
            (true, true) => Some(Self::BothEmpty),
            (true, false) => Some(Self::EmptyResume),
            (false, true) => Some(Self::EmptyJobDescription),
            (false, false) => None,
        }
    }
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyResume => write!(f, "resume has no content after normalization"),
            Self::EmptyJobDescription => {
                write!(f, "job description has no content after normalization")
            }
            Self::BothEmpty => write!(f, "neither document has content after normalization"),
        }
    }
}

/// Score and keyword gap of one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    score: f64,
    missing_keywords: KeywordSet,
    degenerate: Option<DegenerateInput>,
}

impl MatchResult {
    /// Percentage in `[0, 100]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Job description keywords absent from the resume.
    pub fn missing_keywords(&self) -> &KeywordSet {
        &self.missing_keywords
    }

    pub fn degenerate(&self) -> Option<DegenerateInput> {
        self.degenerate
    }

    /// True when the resume covers every job description keyword.
    pub fn has_full_coverage(&self) -> bool {
        self.missing_keywords.is_empty()
    }
}

/// One document together with what the normalizer derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document: Document,
    pub normalized: NormalizedText,
    pub keywords: KeywordSet,
}

/// Everything a report needs about one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub resume: DocumentAnalysis,
    pub job_description: DocumentAnalysis,
    pub strategy: KeywordStrategy,
    pub result: MatchResult,
    pub processing_time_ms: u64,
}

/// Compares resumes with job descriptions.
///
/// Holds no per-request state, so a single analyzer can be cloned or shared by
/// reference across threads.
#[derive(Clone)]
pub struct MatchAnalyzer {
    normalizer: Normalizer,
    engine: SimilarityEngine,
}

impl MatchAnalyzer {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            engine: SimilarityEngine::new(),
        }
    }

    pub fn from_config(config: &NlpConfig) -> Result<Self> {
        Ok(Self::new(Normalizer::from_config(config)?))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> MatchResult {
        self.analyze_documents(
            Document::resume(resume_text),
            Document::job_description(jd_text),
        )
        .result
    }

    /// Full analysis keeping the intermediate texts for reporting.
    pub fn analyze_documents(&self, resume: Document, job_description: Document) -> AnalysisOutcome {
        let start_time = Instant::now();

        let resume = self.inspect(resume);
        let job_description = self.inspect(job_description);

        let degenerate = DegenerateInput::detect(&resume.normalized, &job_description.normalized);
        let score = match degenerate {
            Some(kind) => {
                warn!("Degenerate input ({}), match score is 0", kind);
                0.0
            }
            None => self.engine.compute_match_score(
                &resume.normalized.as_text(),
                &job_description.normalized.as_text(),
            ),
        };

        let missing = missing_keywords(&resume.keywords, &job_description.keywords);
        let processing_time = start_time.elapsed();

        info!(
            "Match score {:.2}% with {} missing keywords",
            score,
            missing.len()
        );

        AnalysisOutcome {
            resume,
            job_description,
            strategy: self.normalizer.strategy(),
            result: MatchResult {
                score,
                missing_keywords: missing,
                degenerate,
            },
            processing_time_ms: processing_time.as_millis() as u64,
        }
    }

    /// Normalize one document and extract its keywords.
    pub fn inspect(&self, document: Document) -> DocumentAnalysis {
        let (normalized, keywords) = self.normalizer.process(&document.text);
        debug!(
            "{}: {} lemmas, {} keywords",
            role_label(document.role),
            normalized.len(),
            keywords.len()
        );
        DocumentAnalysis {
            document,
            normalized,
            keywords,
        }
    }
}

fn role_label(role: DocumentRole) -> &'static str {
    match role {
        DocumentRole::Resume => "Resume",
        DocumentRole::JobDescription => "Job description",
    }
}
