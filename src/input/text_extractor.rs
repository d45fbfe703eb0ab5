//! Text extraction from various file formats
//!
//! Every extractor produces a normalized text blob: page/line texts joined by
//! single newlines with leading and trailing whitespace trimmed. A document
//! that opens but yields no text is an empty blob, not an error.

use crate::error::{ResumeParserError, Result};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeParserError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeParserError::UnreadableDocument(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(normalize_blob(&text))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeParserError::Io)?;
        Ok(normalize_blob(&content))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeParserError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(normalize_blob(&self.html_to_text(&html_output)))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

/// Join page texts with single newlines and trim the result. Empty pages and
/// runs of blank lines contribute nothing.
pub fn normalize_blob(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_edges() {
        assert_eq!(normalize_blob("  \nJOHN DOE\nEngineer\n\n"), "JOHN DOE\nEngineer");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_blob(""), "");
        assert_eq!(normalize_blob("   \n\t\n"), "");
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "JANE DOE\njane@example.com\n").unwrap();

        let text = PlainTextExtractor.extract(&path).await.unwrap();
        assert_eq!(text, "JANE DOE\njane@example.com");
    }

    #[tokio::test]
    async fn test_markdown_strips_formatting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# JANE DOE\n\n**Skills**: Python, React\n").unwrap();

        let text = MarkdownExtractor.extract(&path).await.unwrap();
        assert!(text.contains("JANE DOE"));
        assert!(text.contains("Python, React"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }
}
