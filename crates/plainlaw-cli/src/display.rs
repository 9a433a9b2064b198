//! Vertical card display for analysis results.
//!
//! Renders an [`AnalysisResult`] as a grouped, human-readable card. Empty
//! sections are skipped and long lists are capped.

use plainlaw_core::{AnalysisReport, AnalysisResult, Section};

const MAX_LIST_ITEMS: usize = 10;

// ── Card section groupings ──

const LIST_SECTIONS: &[(&str, Section)] = &[
    ("Key Points", Section::KeyPoints),
    ("Parties", Section::Parties),
    ("Important Dates", Section::ImportantDates),
    ("Payment Terms", Section::PaymentTerms),
    ("Risks", Section::Risks),
    ("Recommendations", Section::Recommendations),
];

// ── Public API ──

/// Print a normalised result as a card.
pub fn print_result_card(result: &AnalysisResult) {
    print!("{}", render_result_card(result));
}

/// Print a report: metadata header followed by the result card.
pub fn print_report_card(report: &AnalysisReport) {
    print!("{}", render_report_card(report));
}

pub fn render_result_card(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let title = if result.document_type.is_empty() {
        "(untitled analysis)"
    } else {
        result.document_type.as_str()
    };
    out.push_str(&format!("=== {title} ===\n"));
    if !result.summary.is_empty() {
        out.push_str(&format!("{}\n", result.summary));
    }
    out.push('\n');

    if result.is_empty() {
        out.push_str("No analysis content was recognised.\n");
        return out;
    }

    for (header, section) in LIST_SECTIONS {
        if let Some(items) = result.list(*section) {
            render_list(&mut out, header, items);
        }
    }
    out
}

pub fn render_report_card(report: &AnalysisReport) -> String {
    let body = &report.analysis;
    let meta = &body.analysis_metadata;

    let mut out = String::new();
    out.push_str("Report\n");
    out.push_str(&format!("  {:<16} {}\n", "file", report.file_name));
    out.push_str(&format!(
        "  {:<16} {} ({})\n",
        "detected type",
        body.detected_document_type,
        body.detected_document_type.focus()
    ));
    out.push_str(&format!("  {:<16} {}\n", "model", meta.ai_model));
    out.push_str(&format!(
        "  {:<16} {}{}\n",
        "characters",
        meta.document_length,
        if meta.truncated { " (truncated)" } else { "" }
    ));
    out.push_str(&format!("  {:<16} {}\n", "analysed at", meta.analyzed_at));
    out.push('\n');

    out.push_str(&render_result_card(&body.result));
    out
}

// ── Section rendering ──

fn render_list(out: &mut String, header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    out.push_str(&format!("{header} ({})\n", items.len()));
    for item in items.iter().take(MAX_LIST_ITEMS) {
        out.push_str(&format!("  - {item}\n"));
    }
    if items.len() > MAX_LIST_ITEMS {
        out.push_str(&format!("  ... and {} more\n", items.len() - MAX_LIST_ITEMS));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainlaw_core::{AnalysisMetadata, DocumentKind};

    #[test]
    fn empty_sections_skipped() {
        let r = AnalysisResult {
            document_type: "NDA".into(),
            summary: "Mutual confidentiality.".into(),
            risks: vec!["Perpetual term".into()],
            ..Default::default()
        };
        let card = render_result_card(&r);
        assert!(card.starts_with("=== NDA ===\nMutual confidentiality.\n"));
        assert!(card.contains("Risks (1)\n  - Perpetual term\n"));
        assert!(!card.contains("Key Points"));
        assert!(!card.contains("Parties"));
    }

    #[test]
    fn long_lists_capped() {
        let r = AnalysisResult {
            key_points: (1..=13).map(|i| format!("point {i}")).collect(),
            ..Default::default()
        };
        let card = render_result_card(&r);
        assert!(card.contains("Key Points (13)"));
        assert!(card.contains("  - point 10\n"));
        assert!(!card.contains("point 11"));
        assert!(card.contains("... and 3 more"));
    }

    #[test]
    fn empty_result_says_so() {
        let card = render_result_card(&AnalysisResult::default());
        assert!(card.contains("(untitled analysis)"));
        assert!(card.contains("No analysis content was recognised."));
    }

    #[test]
    fn report_header_shows_metadata() {
        let meta = AnalysisMetadata::new(30_000, "gemini-1.5-flash", DocumentKind::Lease, true);
        let report = AnalysisReport::new(
            "lease.txt",
            AnalysisResult::default(),
            DocumentKind::Lease,
            meta,
        );
        let card = render_report_card(&report);
        assert!(card.contains("lease.txt"));
        assert!(card.contains("lease (rental obligations"));
        assert!(card.contains("30000 (truncated)"));
        assert!(card.contains("gemini-1.5-flash"));
    }
}
