//! Section labels recognised in delimited model replies.
//!
//! A header is a line ending in `:`. Its label is lower-cased, stripped of
//! the colon, trimmed, and has its spaces removed before lookup, so
//! `"Key Points:"`, `"KEY POINTS:"` and `"KeyPoints:"` all resolve to
//! [`Section::KeyPoints`].

/// One output field of [`AnalysisResult`](crate::AnalysisResult) that text can be routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    DocumentType,
    Summary,
    KeyPoints,
    Parties,
    ImportantDates,
    PaymentTerms,
    Risks,
    Recommendations,
}

/// Normalised header label → section. Fixed vocabulary; anything else is unrecognised.
pub const SECTION_LABELS: &[(&str, Section)] = &[
    ("documenttype", Section::DocumentType),
    ("summary", Section::Summary),
    ("keypoints", Section::KeyPoints),
    ("parties", Section::Parties),
    ("importantdates", Section::ImportantDates),
    ("payment/money", Section::PaymentTerms),
    ("risks", Section::Risks),
    ("recommendations", Section::Recommendations),
];

impl Section {
    /// Resolve a header line (e.g. `"Key Points:"`) to a section.
    ///
    /// Returns `None` for lines without a trailing colon and for labels
    /// outside [`SECTION_LABELS`].
    pub fn from_header(line: &str) -> Option<Self> {
        let label = line.trim().strip_suffix(':')?;
        let key: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        SECTION_LABELS
            .iter()
            .find(|(l, _)| *l == key)
            .map(|(_, s)| *s)
    }

    /// List-valued sections accumulate `-` items; the other two are scalar.
    pub fn is_list(self) -> bool {
        !matches!(self, Self::DocumentType | Self::Summary)
    }

    /// The camelCase field name used in the serialised result.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::DocumentType => "documentType",
            Self::Summary => "summary",
            Self::KeyPoints => "keyPoints",
            Self::Parties => "parties",
            Self::ImportantDates => "importantDates",
            Self::PaymentTerms => "paymentTerms",
            Self::Risks => "risks",
            Self::Recommendations => "recommendations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_label() {
        for (label, section) in SECTION_LABELS {
            assert_eq!(Section::from_header(&format!("{label}:")), Some(*section));
        }
    }

    #[test]
    fn case_and_spaces_ignored() {
        assert_eq!(Section::from_header("Key Points:"), Some(Section::KeyPoints));
        assert_eq!(Section::from_header("KEY POINTS:"), Some(Section::KeyPoints));
        assert_eq!(
            Section::from_header("  Document Type :  "),
            Some(Section::DocumentType)
        );
        assert_eq!(
            Section::from_header("ImportantDates:"),
            Some(Section::ImportantDates)
        );
    }

    #[test]
    fn payment_money_maps_to_payment_terms() {
        assert_eq!(
            Section::from_header("Payment/Money:"),
            Some(Section::PaymentTerms)
        );
        assert_eq!(
            Section::from_header("payment / money:"),
            Some(Section::PaymentTerms)
        );
    }

    #[test]
    fn unknown_labels_unrecognised() {
        assert_eq!(Section::from_header("Foo:"), None);
        assert_eq!(Section::from_header("Payment Terms:"), None);
        assert_eq!(Section::from_header(":"), None);
    }

    #[test]
    fn requires_trailing_colon() {
        assert_eq!(Section::from_header("Summary"), None);
        assert_eq!(Section::from_header("Summary: the lease"), None);
    }

    #[test]
    fn scalar_vs_list() {
        assert!(!Section::DocumentType.is_list());
        assert!(!Section::Summary.is_list());
        assert!(Section::KeyPoints.is_list());
        assert!(Section::PaymentTerms.is_list());
        assert!(Section::Recommendations.is_list());
    }

    #[test]
    fn field_names_are_camel_case() {
        assert_eq!(Section::ImportantDates.field_name(), "importantDates");
        assert_eq!(Section::PaymentTerms.field_name(), "paymentTerms");
    }
}
