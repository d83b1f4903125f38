//! Verification domain: raw service payloads and their normalized verdict.

pub mod response;
pub mod verdict;

pub use response::{RawDocumentAnalysis, VerificationResponse};
pub use verdict::{
    BlurSeverity, DocumentAnalysis, FieldComparison, VerdictStatus, VerificationVerdict,
};
