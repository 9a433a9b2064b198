//! Document preparation and prompt construction for LLM document analysis.

pub mod document;
pub mod prompt;

pub use document::{DocumentError, MAX_DOCUMENT_CHARS, PreparedText, load_document, prepare_text};
pub use prompt::{analysis_prompt, classification_prompt};
