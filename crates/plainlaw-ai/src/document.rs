//! Loading and bounding document text before it is sent for analysis.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Upper bound on characters sent to the model.
pub const MAX_DOCUMENT_CHARS: usize = 30_000;

pub const TRUNCATION_MARKER: &str = "\n\n[Document truncated for analysis...]";

/// Extensions `load_document` accepts, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported document format: {0} (expected PDF, DOCX, TXT or MD)")]
    UnsupportedFormat(String),

    #[error("no text could be extracted from {0}")]
    Empty(PathBuf),

    #[error("reading PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("reading DOCX: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document text ready for a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    pub text: String,
    /// Character count before truncation.
    pub original_chars: usize,
    pub truncated: bool,
}

/// Extract a document's text, trimmed.
///
/// PDF pages are tagged `--- Page N ---`; DOCX keeps non-empty paragraphs,
/// one per line; text files are read as UTF-8 with invalid bytes replaced.
pub fn load_document(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = match ext.as_str() {
        "pdf" => extract_pdf(path)?,
        "docx" => extract_docx(path)?,
        "txt" | "md" => String::from_utf8_lossy(&std::fs::read(path)?).into_owned(),
        _ => {
            let shown = if ext.is_empty() { "(none)".to_string() } else { format!(".{ext}") };
            return Err(DocumentError::UnsupportedFormat(shown));
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(DocumentError::Empty(path.to_path_buf()));
    }

    info!(path = %path.display(), format = %ext, chars = text.chars().count(), "loaded document");
    Ok(text)
}

/// Page text, each page preceded by its 1-based `--- Page N ---` tag.
/// Pages with no extractable text are skipped.
fn extract_pdf(path: &Path) -> Result<String, DocumentError> {
    let doc = lopdf::Document::load(path)?;
    let mut text = String::new();
    for page in doc.get_pages().into_keys() {
        let page_text = doc.extract_text(&[page])?;
        let page_text = page_text.trim();
        if page_text.is_empty() {
            debug!(page, "no text on page");
            continue;
        }
        text.push_str(&format!("\n--- Page {page} ---\n{page_text}\n"));
    }
    Ok(text)
}

/// Non-empty paragraphs, one per line.
fn extract_docx(path: &Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes)?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        let docx_rs::DocumentChild::Paragraph(paragraph) = child else {
            continue;
        };
        let line = paragraph_text(paragraph);
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for piece in &run.children {
                match piece {
                    docx_rs::RunChild::Text(t) => out.push_str(&t.text),
                    docx_rs::RunChild::Tab(_) => out.push('\t'),
                    _ => {}
                }
            }
        }
    }
    out
}

/// Bound `text` to `max_chars` characters, appending [`TRUNCATION_MARKER`] when cut.
pub fn prepare_text(text: &str, max_chars: usize) -> PreparedText {
    let original_chars = text.chars().count();
    if original_chars <= max_chars {
        return PreparedText {
            text: text.to_string(),
            original_chars,
            truncated: false,
        };
    }

    // Byte offset of the first char past the limit.
    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    info!(original_chars, max_chars, "document truncated");
    PreparedText {
        text: format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        original_chars,
        truncated: true,
    }
}
