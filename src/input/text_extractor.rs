//! Text extraction from various file formats

use crate::error::{MatcherError, Result};
use docx_rs::{DocumentChild, Docx, Paragraph, ParagraphChild, RunChild};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let display = path.display().to_string();

        // pdf-extract is synchronous and can be slow on long documents
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                MatcherError::PdfExtraction(format!("PDF extraction task for '{}' failed: {}", display, e))
            })?
            .map_err(|e| {
                MatcherError::PdfExtraction(format!(
                    "Failed to extract text from PDF '{}': {}",
                    display, e
                ))
            })
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| {
            MatcherError::DocxExtraction(format!(
                "Failed to read DOCX '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::docx_to_text(&docx))
    }
}

impl DocxExtractor {
    /// Body paragraphs of the document, one per line.
    pub fn docx_to_text(docx: &Docx) -> String {
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_runs(&paragraph.children, &mut text);
    text
}

fn push_runs(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push(' '),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, text),
            _ => {}
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        String::from_utf8(bytes).map_err(|_| {
            MatcherError::InvalidInput(format!("File is not valid UTF-8: {}", path.display()))
        })
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Plain text of a Markdown document, one block per line.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak => text.push(' '),
                Event::HardBreak | Event::Rule => text.push('\n'),
                Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                    text.push('\n')
                }
                Event::End(Tag::TableCell) => text.push(' '),
                Event::End(Tag::TableRow | Tag::TableHead) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# Jane Doe\n\n## Skills\n\n- **Rust** and `tokio`\n- Python & AWS\n\nBuilt [services](https://example.com)\nat scale.";
        assert_eq!(
            MarkdownExtractor::markdown_to_text(markdown),
            "Jane Doe\nSkills\nRust and tokio\nPython & AWS\nBuilt services at scale."
        );
    }

    #[test]
    fn test_docx_to_text_joins_paragraphs() {
        use docx_rs::Run;

        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Rust, "))
                    .add_run(Run::new().add_text("C++ and AWS")),
            )
            .add_paragraph(Paragraph::new());
        assert_eq!(
            DocxExtractor::docx_to_text(&docx),
            "Jane Doe\nRust, C++ and AWS\n"
        );
    }

    #[test]
    fn test_markdown_without_content() {
        assert_eq!(MarkdownExtractor::markdown_to_text("\n\n---\n\n"), "");
    }
}
