//! Report building, formatting and persistence

pub mod formatter;
pub mod report;
pub mod session_log;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::MatchReport;
pub use session_log::{SessionEntry, SessionLog};
