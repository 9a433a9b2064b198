//! Analysis pipeline: document text + model reply → report envelope.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use plainlaw_ai::{load_document, prepare_text};
use plainlaw_core::{AnalysisMetadata, AnalysisReport, DocumentKind, normalize_response};
use tracing::{info, warn};

pub struct AnalyzeOptions<'a> {
    pub document: &'a Path,
    pub response: &'a Path,
    /// Raw reply of the classification prompt, if one was made.
    pub kind_reply: Option<&'a str>,
    pub model: &'a str,
    pub max_chars: usize,
}

/// Read a model reply from `path`, or from stdin when `path` is `None`.
pub fn read_reply(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading reply {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading reply from stdin")?;
            Ok(buf)
        }
    }
}

/// Run the full pipeline: load document → bound text → normalise reply → envelope.
pub fn run_analyze(opts: &AnalyzeOptions<'_>) -> anyhow::Result<AnalysisReport> {
    // 1. Document text, bounded as it was when sent to the model.
    let text = load_document(opts.document)
        .with_context(|| format!("loading document {}", opts.document.display()))?;
    let prepared = prepare_text(&text, opts.max_chars);

    // 2. Detected kind.
    let kind = opts
        .kind_reply
        .map(DocumentKind::from_reply)
        .unwrap_or_default();
    info!(kind = %kind, "document type");

    // 3. Normalise the analysis reply.
    let reply = read_reply(Some(opts.response))?;
    let result = normalize_response(&reply);
    if result.is_empty() {
        warn!("model reply contained no recognised analysis sections");
    }

    let file_name = opts
        .document
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = AnalysisMetadata::new(
        prepared.text.chars().count(),
        opts.model,
        kind,
        prepared.truncated,
    );

    info!(file = %file_name, model = opts.model, "analysis completed");
    Ok(AnalysisReport::new(&file_name, result, kind, metadata))
}
