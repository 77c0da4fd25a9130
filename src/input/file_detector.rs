//! File type detection

use crate::error::{MatcherError, Result};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    /// Office Open XML word processing document.
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                MatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;
        Ok(Self::from_extension(extension))
    }

    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "docx", "txt", "md", "markdown"]
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Pdf => "PDF",
            FileType::Text => "plain text",
            FileType::Markdown => "Markdown",
            FileType::Docx => "DOCX",
            FileType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("doc"), FileType::Unknown);
        assert_eq!(FileType::from_extension("xyz"), FileType::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            FileType::from_path(Path::new("cv/resume.md")).unwrap(),
            FileType::Markdown
        );
        assert!(matches!(
            FileType::from_path(Path::new("resume")),
            Err(MatcherError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_supported_types() {
        assert_eq!(FileType::Docx.to_string(), "DOCX");
        assert!(FileType::supported_extensions().contains(&"docx"));
    }
}
