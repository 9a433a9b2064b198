//! Legal document categories used to steer analysis.
//!
//! The classifier is asked for exactly one category name. Replies outside
//! the vocabulary fall back to [`DocumentKind::General`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    // Contracts
    Contract,
    Nda,
    Will,
    Lease,
    Employment,
    Partnership,
    PowerOfAttorney,
    License,
    Settlement,
    Loan,
    Insurance,
    // Corporate & property
    Corporate,
    RealEstate,
    // Court & legal
    CourtOrder,
    Judgment,
    Affidavit,
    LegalNotice,
    #[default]
    General,
}

impl DocumentKind {
    pub const ALL: &'static [DocumentKind] = &[
        Self::Contract,
        Self::Nda,
        Self::Will,
        Self::Lease,
        Self::Employment,
        Self::Partnership,
        Self::PowerOfAttorney,
        Self::License,
        Self::Settlement,
        Self::Loan,
        Self::Insurance,
        Self::Corporate,
        Self::RealEstate,
        Self::CourtOrder,
        Self::Judgment,
        Self::Affidavit,
        Self::LegalNotice,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Nda => "nda",
            Self::Will => "will",
            Self::Lease => "lease",
            Self::Employment => "employment",
            Self::Partnership => "partnership",
            Self::PowerOfAttorney => "power_of_attorney",
            Self::License => "license",
            Self::Settlement => "settlement",
            Self::Loan => "loan",
            Self::Insurance => "insurance",
            Self::Corporate => "corporate",
            Self::RealEstate => "real_estate",
            Self::CourtOrder => "court_order",
            Self::Judgment => "judgment",
            Self::Affidavit => "affidavit",
            Self::LegalNotice => "legal_notice",
            Self::General => "general",
        }
    }

    /// Exact category name lookup. Case-sensitive; see [`Self::from_reply`]
    /// for the lenient form.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    /// Interpret a classifier reply. Trimmed and lower-cased; unknown
    /// categories become [`DocumentKind::General`].
    pub fn from_reply(reply: &str) -> Self {
        let name = reply.trim().to_lowercase();
        Self::from_name(&name).unwrap_or_else(|| {
            warn!(reply = %name, "unrecognised document type, using general");
            Self::General
        })
    }

    /// What the analysis should concentrate on for this kind of document.
    pub fn focus(&self) -> &'static str {
        match self {
            Self::Contract => {
                "contractual obligations, performance requirements, and legal commitments"
            }
            Self::Nda => {
                "confidentiality obligations, information protection, and disclosure restrictions"
            }
            Self::Will => "asset distribution, beneficiary rights, and estate planning",
            Self::Lease => "rental obligations, property usage rights, and tenancy terms",
            Self::Employment => "employment terms, job responsibilities, and worker rights",
            Self::Partnership => {
                "business partnership terms, profit sharing, and management responsibilities"
            }
            Self::PowerOfAttorney => {
                "delegated authority, agent powers, and principal protection"
            }
            Self::License => {
                "usage rights, licensing terms, and intellectual property protection"
            }
            Self::Settlement => "dispute resolution, settlement terms, and legal releases",
            Self::Loan => "lending terms, repayment obligations, and default consequences",
            Self::Insurance => "insurance coverage, policy terms, and claim procedures",
            Self::Corporate => {
                "corporate governance, shareholder rights, and regulatory compliance"
            }
            Self::RealEstate => {
                "property transfer, purchase terms, and real estate obligations"
            }
            Self::CourtOrder => {
                "court mandates, compliance requirements, and legal obligations"
            }
            Self::Judgment => "judicial reasoning, legal precedents, and case implications",
            Self::Affidavit => {
                "sworn statements, factual declarations, and legal attestations"
            }
            Self::LegalNotice => {
                "legal demands, compliance requirements, and potential consequences"
            }
            Self::General => "general legal provisions and key obligations",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
