//! Pairwise TF-IDF vectorization
//!
//! The vocabulary and the IDF weights are fit on exactly the documents being
//! compared, so weights express pairwise overlap rather than importance in a
//! larger corpus.

use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Vectorizes space-joined lemma sequences.
///
/// Every whitespace-separated lemma is a term, whatever its length or
/// punctuation, so `c++`, `c#` and `r` weigh in like any other word.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer;

/// Dense document-term matrix produced by [`TfidfVectorizer::fit_transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase the document and split it into vocabulary terms.
    pub fn analyze(&self, document: &str) -> Vec<String> {
        document
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// Fit the vocabulary and smoothed IDF on `documents`, then weight each one.
    ///
    /// Term frequency is the raw count weighted by
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`. Non-zero rows are scaled to
    /// unit L2 norm.
    pub fn fit_transform(&self, documents: &[&str]) -> TfidfMatrix {
        let analyzed: Vec<Vec<String>> = documents.iter().map(|d| self.analyze(d)).collect();

        let vocabulary: Vec<String> = analyzed
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: BTreeMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let counts: Vec<Vec<f64>> = analyzed
            .iter()
            .map(|terms| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in terms {
                    if let Some(&i) = index.get(term.as_str()) {
                        row[i] += 1.0;
                    }
                }
                row
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|i| {
                let df = counts.iter().filter(|row| row[i] > 0.0).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = counts
            .into_iter()
            .map(|row| {
                let weighted: Vec<f64> = row.iter().zip(&idf).map(|(tf, w)| tf * w).collect();
                l2_normalize(weighted)
            })
            .collect();

        debug!(
            "Fit TF-IDF over {} documents with {} terms",
            documents.len(),
            vocabulary.len()
        );

        TfidfMatrix { vocabulary, rows }
    }
}

impl TfidfMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, document: usize) -> Option<&[f64]> {
        self.rows.get(document).map(Vec::as_slice)
    }
}

fn l2_normalize(mut row: Vec<f64>) -> Vec<f64> {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in &mut row {
            *v /= norm;
        }
    }
    row
}
