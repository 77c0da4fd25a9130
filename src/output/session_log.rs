//! Append-only history of analyses, one JSON object per line

use crate::error::Result;
use crate::output::report::MatchReport;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub timestamp: DateTime<Utc>,
    pub resume_file: Option<String>,
    pub job_file: Option<String>,
    pub score: f64,
    pub missing_keywords: Vec<String>,
}

impl From<&MatchReport> for SessionEntry {
    fn from(report: &MatchReport) -> Self {
        Self {
            timestamp: report.metadata.generated_at,
            resume_file: report.metadata.resume_file.clone(),
            job_file: report.metadata.job_file.clone(),
            score: report.summary.score,
            missing_keywords: report.keywords.missing_keywords.clone(),
        }
    }
}

pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &SessionEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;

        debug!("Appended session entry to {}", self.path.display());
        Ok(())
    }

    /// All entries so far; a missing log is an empty history.
    pub fn entries(&self) -> Result<Vec<SessionEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(score: f64, missing: &[&str]) -> SessionEntry {
        SessionEntry {
            timestamp: Utc::now(),
            resume_file: Some("resume.pdf".to_string()),
            job_file: Some("job.txt".to_string()),
            score,
            missing_keywords: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let log = SessionLog::new(dir.path().join("history").join("sessions.jsonl"));
        assert!(log.entries().unwrap().is_empty());

        let first = entry(42.5, &["aws"]);
        let second = entry(100.0, &[]);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        assert_eq!(log.entries().unwrap(), vec![first, second]);
        let raw = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(raw.lines().count(), 2);
    }
}
