//! Input manager for loading resumes and job descriptions from disk

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::processing::document::{Document, DocumentRole};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads documents and caches their text per path.
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Extract the plain text of a supported file.
    ///
    /// Text that is empty after trimming is rejected as `InvalidInput`.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(cached_text) = self.cache.get(path) {
            debug!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        if !path.exists() {
            return Err(MatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path)?;
        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(MatcherError::UnsupportedFormat(format!(
                    "{} files are not supported ({}); use one of: {}",
                    file_type,
                    path.display(),
                    FileType::supported_extensions().join(", ")
                )));
            }
        };

        if text.trim().is_empty() {
            return Err(MatcherError::InvalidInput(format!(
                "No text could be extracted from {}",
                path.display()
            )));
        }

        self.cache.insert(path.to_path_buf(), text.clone());

        Ok(text)
    }

    /// Load a file as a document in the given role, named after the file.
    pub async fn load_document(&mut self, path: &Path, role: DocumentRole) -> Result<Document> {
        let text = self.extract_text(path).await?;
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Document::new(role, text).with_source(source))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
