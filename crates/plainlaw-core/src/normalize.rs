//! Result normalizer: reconciles structured and delimited-text replies into
//! one [`AnalysisResult`].
//!
//! Neither path can fail. Missing sections, malformed headers and
//! out-of-place content all fall back to the field defaults.
//!
//! # Delimited text convention
//!
//! ```text
//! Document Type:
//! Residential lease
//! Summary:
//! A twelve-month tenancy.
//! Rent is due monthly.
//! Key Points:
//! - Deposit of one month's rent
//! - No pets
//! ```
//!
//! - Header lines end in `:` and are resolved with [`Section::from_header`].
//!   An unrecognised header leaves the current section as it was.
//! - In list sections each `-` line is one item, marker stripped.
//! - `documentType` keeps the first content line it sees; `summary` joins
//!   every content line with a single space.
//! - `-` lines are list items only. Under `Document Type:` or `Summary:` they
//!   are dropped, so a bulleted answer such as `- Lease Agreement` leaves
//!   `documentType` empty.
//! - Blank lines, and lines seen before any recognised header, are dropped.

use serde_json::Value;
use tracing::{debug, trace};

use crate::analysis::{AnalysisResult, PartialAnalysis};
use crate::section::Section;

/// A model reply before normalisation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAnalysis {
    /// A loosely-typed object, e.g. the JSON parse of a reply.
    Structured(Value),
    /// Header + bullet delimited text.
    Text(String),
}

/// Normalise either input shape into the canonical result.
pub fn normalize(raw: &RawAnalysis) -> AnalysisResult {
    match raw {
        RawAnalysis::Structured(value) => normalize_value(value),
        RawAnalysis::Text(text) => normalize_text(text),
    }
}

/// Structured path: shape-check each field, default the rest.
pub fn normalize_value(value: &Value) -> AnalysisResult {
    PartialAnalysis::from_value(value).into()
}

/// Text path: a single forward pass over the lines of `text`.
pub fn normalize_text(text: &str) -> AnalysisResult {
    let mut acc = Accumulator::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.ends_with(':') {
            match Section::from_header(line) {
                Some(section) => acc.current = Some(section),
                None => debug!(header = line, "unrecognised section header"),
            }
            continue;
        }

        acc.push(line);
    }

    acc.finish()
}

/// Per-call scan state. `current` is the section content lines are routed to.
#[derive(Default)]
struct Accumulator<'a> {
    current: Option<Section>,
    document_type: Option<&'a str>,
    summary: Vec<&'a str>,
    result: AnalysisResult,
}

impl<'a> Accumulator<'a> {
    fn push(&mut self, line: &'a str) {
        let Some(section) = self.current else {
            return;
        };

        if let Some(item) = line.strip_prefix('-') {
            match self.result.list_mut(section) {
                Some(list) => {
                    let item = item.trim();
                    if !item.is_empty() {
                        list.push(item.to_string());
                    }
                }
                None => debug!(
                    section = section.field_name(),
                    line, "dropping list item in scalar section"
                ),
            }
            return;
        }

        match section {
            Section::DocumentType => {
                if self.document_type.is_none() {
                    self.document_type = Some(line);
                }
            }
            Section::Summary => self.summary.push(line),
            _ => trace!(
                section = section.field_name(),
                line, "dropping unmarked line in list section"
            ),
        }
    }

    fn finish(self) -> AnalysisResult {
        let mut result = self.result;
        result.document_type = self.document_type.unwrap_or_default().to_string();
        result.summary = self.summary.join(" ");
        trace!(
            key_points = result.key_points.len(),
            parties = result.parties.len(),
            important_dates = result.important_dates.len(),
            payment_terms = result.payment_terms.len(),
            risks = result.risks.len(),
            recommendations = result.recommendations.len(),
            "normalised text reply"
        );
        result
    }
}
