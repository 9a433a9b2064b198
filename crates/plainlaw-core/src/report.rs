//! Report envelope returned to display and storage collaborators.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::kind::DocumentKind;

pub const SUCCESS_MESSAGE: &str = "Analysis completed successfully";

/// Top-level envelope for one analysed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub message: String,
    pub file_name: String,
    pub analysis: ReportBody,
}

/// The canonical result plus what the pipeline learned along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBody {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub detected_document_type: DocumentKind,
    pub analysis_metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// Characters of document text sent for analysis.
    pub document_length: usize,
    pub ai_model: String,
    /// `"<kind>_specific"`.
    pub analysis_type: String,
    pub truncated: bool,
    /// RFC 3339 timestamp string.
    pub analyzed_at: String,
}

impl AnalysisMetadata {
    /// Metadata stamped with the current time.
    pub fn new(
        document_length: usize,
        ai_model: &str,
        kind: DocumentKind,
        truncated: bool,
    ) -> Self {
        Self {
            document_length,
            ai_model: ai_model.to_string(),
            analysis_type: format!("{kind}_specific"),
            truncated,
            analyzed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl AnalysisReport {
    pub fn new(
        file_name: &str,
        result: AnalysisResult,
        kind: DocumentKind,
        metadata: AnalysisMetadata,
    ) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            file_name: file_name.to_string(),
            analysis: ReportBody {
                result,
                detected_document_type: kind,
                analysis_metadata: metadata,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> AnalysisReport {
        let result = AnalysisResult {
            document_type: "Lease".into(),
            summary: "A lease.".into(),
            risks: vec!["Late fees".into()],
            ..Default::default()
        };
        let metadata = AnalysisMetadata::new(1234, "gemini-1.5-flash", DocumentKind::Lease, false);
        AnalysisReport::new("lease.txt", result, DocumentKind::Lease, metadata)
    }

    #[test]
    fn analysis_type_uses_kind_name() {
        let m = AnalysisMetadata::new(10, "m", DocumentKind::RealEstate, true);
        assert_eq!(m.analysis_type, "real_estate_specific");
        assert!(m.truncated);
    }

    #[test]
    fn analyzed_at_is_rfc3339() {
        let m = AnalysisMetadata::new(10, "m", DocumentKind::General, false);
        assert!(chrono::DateTime::parse_from_rfc3339(&m.analyzed_at).is_ok());
    }

    #[test]
    fn result_fields_flattened_into_analysis() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["message"], json!(SUCCESS_MESSAGE));
        assert_eq!(v["fileName"], json!("lease.txt"));
        let analysis = &v["analysis"];
        assert_eq!(analysis["documentType"], json!("Lease"));
        assert_eq!(analysis["risks"], json!(["Late fees"]));
        assert_eq!(analysis["keyPoints"], json!([]));
        assert_eq!(analysis["detectedDocumentType"], json!("lease"));
        assert_eq!(analysis["analysisMetadata"]["aiModel"], json!("gemini-1.5-flash"));
        assert_eq!(analysis["analysisMetadata"]["analysisType"], json!("lease_specific"));
        assert_eq!(analysis["analysisMetadata"]["documentLength"], json!(1234));
    }

    #[test]
    fn report_json_roundtrip() {
        let report = sample();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
