//! Match scoring and keyword gap computation

use crate::processing::document::KeywordSet;
use crate::processing::vectorizer::TfidfVectorizer;
use log::debug;

/// Cosine of the angle between two vectors, clamped to `[0, 1]`.
///
/// A zero vector on either side gives 0.0, and identical non-zero vectors
/// give exactly 1.0. Both vectors must share one vocabulary.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors from different vocabularies");

    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Scores a resume against a job description over their normalized text.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    vectorizer: TfidfVectorizer,
}

impl SimilarityEngine {
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
        }
    }

    /// TF-IDF cosine similarity of the pair as a percentage in `[0, 100]`.
    pub fn compute_match_score(&self, normalized_resume: &str, normalized_jd: &str) -> f64 {
        let matrix = self
            .vectorizer
            .fit_transform(&[normalized_resume, normalized_jd]);

        let similarity = match (matrix.row(0), matrix.row(1)) {
            (Some(resume), Some(jd)) => cosine_similarity(resume, jd),
            _ => 0.0,
        };

        let score = similarity * 100.0;
        debug!(
            "Cosine similarity {:.6} over {} terms -> match score {:.2}",
            similarity,
            matrix.vocabulary().len(),
            score
        );
        score
    }
}

/// Job description keywords the resume lacks.
///
/// Both sets are already case-folded, so `AWS` in the job description is
/// covered by `aws` in the resume.
pub fn missing_keywords(resume_keywords: &KeywordSet, jd_keywords: &KeywordSet) -> KeywordSet {
    jd_keywords.difference(resume_keywords)
}
