//! Integration tests for the resume matcher

use resume_matcher::config::{KeywordStrategy, NlpConfig, OutputFormat};
use resume_matcher::error::MatcherError;
use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use resume_matcher::output::report::{MatchReport, FULL_COVERAGE_MESSAGE};
use resume_matcher::output::session_log::{SessionEntry, SessionLog};
use resume_matcher::processing::{DegenerateInput, DocumentRole, MatchAnalyzer};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn analyzer(strategy: KeywordStrategy) -> MatchAnalyzer {
    MatchAnalyzer::from_config(&NlpConfig {
        keyword_strategy: strategy,
        ..NlpConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(&fixture("sample_resume.txt"))
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(&fixture("sample_resume.md"))
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = fixture("sample_resume.txt");

    let text1 = manager.extract_text(&path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(&path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(&fixture("unsupported.xyz")).await;
    assert!(matches!(result, Err(MatcherError::UnsupportedFormat(_))));
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    use docx_rs::{Docx, Paragraph, Run};

    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let file = std::fs::File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.docx");
    write_docx(
        &path,
        &["Jane Doe", "Software Engineer", "Python, Kubernetes and C++"],
    );

    let text = InputManager::new().extract_text(&path).await.unwrap();
    assert_eq!(text, "Jane Doe\nSoftware Engineer\nPython, Kubernetes and C++");
}

#[tokio::test]
async fn test_corrupt_docx_is_an_extraction_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, b"PK\x03\x04").unwrap();

    let result = InputManager::new().extract_text(&path).await;
    assert!(matches!(result, Err(MatcherError::DocxExtraction(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(&fixture("nonexistent.txt")).await;
    assert!(matches!(result, Err(MatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_blank_file_is_rejected() {
    let result = InputManager::new().extract_text(&fixture("blank.txt")).await;
    assert!(matches!(result, Err(MatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_load_document_names_source() {
    let document = InputManager::new()
        .load_document(&fixture("sample_job.txt"), DocumentRole::JobDescription)
        .await
        .unwrap();
    assert_eq!(document.role, DocumentRole::JobDescription);
    assert_eq!(document.source.as_deref(), Some("sample_job.txt"));
}

#[tokio::test]
async fn test_end_to_end_fixture_analysis() {
    let mut manager = InputManager::new();
    let resume = manager
        .load_document(&fixture("sample_resume.txt"), DocumentRole::Resume)
        .await
        .unwrap();
    let job = manager
        .load_document(&fixture("sample_job.txt"), DocumentRole::JobDescription)
        .await
        .unwrap();

    let outcome = analyzer(KeywordStrategy::PartOfSpeech).analyze_documents(resume, job);
    let result = &outcome.result;

    assert!(result.score() > 0.0 && result.score() < 100.0);
    assert!(result.missing_keywords().contains("aws"));
    assert!(!result.missing_keywords().contains("python"));
    assert!(!result.missing_keywords().contains("kubernetes"));
    assert!(result
        .missing_keywords()
        .is_subset(&outcome.job_description.keywords));
}

#[tokio::test]
async fn test_skill_strategy_on_fixtures() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(&fixture("sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(&fixture("sample_job.txt"))
        .await
        .unwrap();

    let result = analyzer(KeywordStrategy::SkillEntity).analyze(&resume, &job);
    assert!(result.missing_keywords().contains("aws"));
    assert!(result.missing_keywords().contains("redis"));
    assert!(!result.missing_keywords().contains("docker"));
}

#[test]
fn test_scenario_partial_overlap() {
    let result = analyzer(KeywordStrategy::PartOfSpeech).analyze(
        "Experienced software engineer skilled in Python and cloud systems.",
        "Looking for a software engineer with Python and AWS experience.",
    );
    assert!(result.score() > 0.0 && result.score() < 100.0);
    assert!(result.missing_keywords().contains("AWS"));
}

#[test]
fn test_scenario_verbatim_copy() {
    let text = std::fs::read_to_string(fixture("sample_job.txt")).unwrap();
    let result = analyzer(KeywordStrategy::PartOfSpeech).analyze(&text, &text);
    assert_eq!(result.score(), 100.0);
    assert!(result.missing_keywords().is_empty());
}

#[test]
fn test_scenario_empty_input() {
    let analyzer = analyzer(KeywordStrategy::PartOfSpeech);
    let jd = "Looking for a software engineer with Python and AWS experience.";

    let result = analyzer.analyze("", jd);
    assert_eq!(result.score(), 0.0);
    assert_eq!(
        result.missing_keywords(),
        &analyzer.normalizer().extract_keywords(jd)
    );

    let result = analyzer.analyze("", "");
    assert_eq!(result.score(), 0.0);
    assert!(result.missing_keywords().is_empty());
    assert_eq!(result.degenerate(), Some(DegenerateInput::BothEmpty));
}

#[test]
fn test_report_export_and_session_log() {
    let dir = TempDir::new().unwrap();
    let text = "Rust engineer with Kubernetes experience.";
    let outcome = analyzer(KeywordStrategy::PartOfSpeech).analyze_documents(
        resume_matcher::processing::Document::resume(text).with_source("cv.txt"),
        resume_matcher::processing::Document::job_description(text).with_source("job.txt"),
    );
    let report = MatchReport::from_outcome(&outcome, 500);

    let content = ReportGenerator::with_options(false, true, true)
        .generate_report(&report, OutputFormat::Text)
        .unwrap();
    let report_path = dir.path().join("feedback.txt");
    save_report_to_file(&content, &report_path).unwrap();
    let saved = std::fs::read_to_string(&report_path).unwrap();
    assert!(saved.contains("Match Score: 100.00/100"));
    assert!(saved.contains(FULL_COVERAGE_MESSAGE));

    let log = SessionLog::new(dir.path().join("sessions.jsonl"));
    log.append(&SessionEntry::from(&report)).unwrap();
    let entries = log.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, 100.0);
    assert_eq!(entries[0].resume_file.as_deref(), Some("cv.txt"));
}
