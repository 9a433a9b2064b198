pub mod analysis;
pub mod kind;
pub mod normalize;
pub mod report;
pub mod response;
pub mod section;

pub use analysis::{AnalysisResult, PartialAnalysis};
pub use kind::DocumentKind;
pub use normalize::{RawAnalysis, normalize, normalize_text, normalize_value};
pub use report::{AnalysisMetadata, AnalysisReport, ReportBody};
pub use response::{decode_response, normalize_response, strip_code_fence};
pub use section::Section;
