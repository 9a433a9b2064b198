//! Canonical analysis result and its partially-populated counterpart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::section::Section;

/// Plain-language analysis of a legal document.
///
/// Every field is always present; absent input maps to an empty string or
/// an empty list. List order follows the order items appeared in the reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub document_type: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub parties: Vec<String>,
    pub important_dates: Vec<String>,
    pub payment_terms: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// True when no field carries any content.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Borrow the list backing a list-valued section. `None` for scalar sections.
    pub fn list(&self, section: Section) -> Option<&[String]> {
        let list = match section {
            Section::KeyPoints => &self.key_points,
            Section::Parties => &self.parties,
            Section::ImportantDates => &self.important_dates,
            Section::PaymentTerms => &self.payment_terms,
            Section::Risks => &self.risks,
            Section::Recommendations => &self.recommendations,
            Section::DocumentType | Section::Summary => return None,
        };
        Some(list)
    }

    pub(crate) fn list_mut(&mut self, section: Section) -> Option<&mut Vec<String>> {
        let list = match section {
            Section::KeyPoints => &mut self.key_points,
            Section::Parties => &mut self.parties,
            Section::ImportantDates => &mut self.important_dates,
            Section::PaymentTerms => &mut self.payment_terms,
            Section::Risks => &mut self.risks,
            Section::Recommendations => &mut self.recommendations,
            Section::DocumentType | Section::Summary => return None,
        };
        Some(list)
    }
}

/// An analysis where any field may be missing or of the wrong shape.
///
/// Built from a loosely-typed JSON object with [`PartialAnalysis::from_value`];
/// converted to the canonical form with `AnalysisResult::from`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAnalysis {
    pub document_type: Option<String>,
    pub summary: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub parties: Option<Vec<String>>,
    pub important_dates: Option<Vec<String>>,
    pub payment_terms: Option<Vec<String>>,
    pub risks: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
}

impl PartialAnalysis {
    /// Shape-check each recognised key of a JSON object.
    ///
    /// Scalar fields must be strings; list fields must be arrays whose
    /// elements are all strings. Anything else is treated as absent.
    /// Unknown keys are ignored and a non-object value yields an empty partial.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            debug!(kind = value_kind(value), "structured reply is not an object");
            return Self::default();
        };

        Self {
            document_type: scalar(obj, Section::DocumentType),
            summary: scalar(obj, Section::Summary),
            key_points: list(obj, Section::KeyPoints),
            parties: list(obj, Section::Parties),
            important_dates: list(obj, Section::ImportantDates),
            payment_terms: list(obj, Section::PaymentTerms),
            risks: list(obj, Section::Risks),
            recommendations: list(obj, Section::Recommendations),
        }
    }
}

impl From<PartialAnalysis> for AnalysisResult {
    fn from(p: PartialAnalysis) -> Self {
        Self {
            document_type: p.document_type.unwrap_or_default(),
            summary: p.summary.unwrap_or_default(),
            key_points: p.key_points.unwrap_or_default(),
            parties: p.parties.unwrap_or_default(),
            important_dates: p.important_dates.unwrap_or_default(),
            payment_terms: p.payment_terms.unwrap_or_default(),
            risks: p.risks.unwrap_or_default(),
            recommendations: p.recommendations.unwrap_or_default(),
        }
    }
}

fn scalar(obj: &Map<String, Value>, section: Section) -> Option<String> {
    let key = section.field_name();
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => {
            debug!(field = key, kind = value_kind(other), "expected string, using default");
            None
        }
    }
}

fn list(obj: &Map<String, Value>, section: Section) -> Option<Vec<String>> {
    let key = section.field_name();
    let value = obj.get(key)?;
    let items = value.as_array().and_then(|arr| {
        arr.iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
    });
    if items.is_none() {
        debug!(field = key, kind = value_kind(value), "expected array of strings, using default");
    }
    items
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
