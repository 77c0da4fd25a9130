//! Resume matcher library: TF-IDF match scoring and keyword gap analysis
//! between a resume and a job description.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use processing::{MatchAnalyzer, MatchResult, Normalizer};
