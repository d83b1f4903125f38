//! Normalized verification verdict.
//!
//! One verdict per verification attempt; a retry replaces it wholesale. The
//! normalization here is deliberately conservative: anything the service did
//! not say collapses to "rejected, score 0, nothing analyzed" instead of an
//! error, and field matches default to a pass unless an explicit negative
//! signal exists.

use serde::{Deserialize, Serialize};

use super::response::{RawDocumentAnalysis, VerificationResponse};
use crate::registration::IdentityFields;

/// Overall verification status.
///
/// 验证结果状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Approved,
    Rejected,
    ManualReview,
    #[default]
    Pending,
}

impl VerdictStatus {
    /// Parses the wire value; anything unrecognized or absent is treated as
    /// rejected, never as approved.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("approved") => Self::Approved,
            Some("manual_review") => Self::ManualReview,
            Some("pending") => Self::Pending,
            _ => Self::Rejected,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Blur severity reported per document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurSeverity {
    #[default]
    None,
    Mild,
    Severe,
}

impl BlurSeverity {
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("mild") => Self::Mild,
            Some("severe") => Self::Severe,
            _ => Self::None,
        }
    }
}

/// One cross-check between a form field and the value extracted from a
/// document.
///
/// 表单字段与证件提取值的交叉核验结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldComparison {
    /// Field name: `name`, `registration_number` or `specialization`.
    pub field: String,
    pub form_value: String,
    pub extracted_value: String,
    pub matched: bool,
}

/// Normalized analysis of a single uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_type: String,
    /// 0–100 authenticity score; 0 when the service omitted it.
    pub authenticity_score: f64,
    pub is_ai_generated: bool,
    pub ai_generation_confidence: f64,
    pub ai_indicators: Vec<String>,
    pub is_blurry: bool,
    pub blur_severity: BlurSeverity,
    /// Exactly three entries: name, registration number, specialization.
    pub field_comparisons: Vec<FieldComparison>,
    pub notes: String,
}

/// Normalized result of one verification submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    pub status: VerdictStatus,
    /// 0–100 confidence score (`confidence_score` on the wire).
    pub overall_score: f64,
    pub documents: Vec<DocumentAnalysis>,
    pub issues: Vec<String>,
    pub recommendation: String,
}

impl VerificationVerdict {
    /// Normalizes a raw service response. Never fails: missing fields default
    /// to score 0, status rejected and empty lists.
    pub fn from_response(raw: VerificationResponse, identity: &IdentityFields) -> Self {
        let documents = raw
            .document_analysis
            .iter()
            .map(|doc| normalize_document(doc, &raw, identity))
            .collect();

        Self {
            status: VerdictStatus::from_wire(raw.status.as_deref()),
            overall_score: clamp_score(raw.confidence_score),
            documents,
            issues: raw.issues,
            recommendation: raw.recommendation.unwrap_or_default(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }

    /// False when the service returned no per-document breakdown; renderers
    /// must show an explicit "no analysis available" state instead of
    /// treating the verdict as evaluated.
    pub fn has_analysis(&self) -> bool {
        !self.documents.is_empty()
    }

    /// True when any document was flagged as AI-generated.
    pub fn has_ai_flag(&self) -> bool {
        self.documents.iter().any(|doc| doc.is_ai_generated)
    }
}

fn normalize_document(
    doc: &RawDocumentAnalysis,
    response: &VerificationResponse,
    identity: &IdentityFields,
) -> DocumentAnalysis {
    let blur_severity = BlurSeverity::from_wire(doc.blur_severity.as_deref());

    DocumentAnalysis {
        document_type: doc.document_type.clone().unwrap_or_default(),
        authenticity_score: clamp_score(doc.authenticity_score),
        is_ai_generated: doc.is_ai_generated.unwrap_or(false),
        ai_generation_confidence: clamp_score(doc.ai_generation_confidence),
        ai_indicators: doc.ai_indicators.clone(),
        // Severe blur counts as blurry even if the flag itself is missing.
        is_blurry: doc.is_blurry.unwrap_or(false) || blur_severity == BlurSeverity::Severe,
        blur_severity,
        field_comparisons: vec![
            compare_field(
                "name",
                &identity.name,
                doc.extracted_name.as_deref(),
                doc.name_match,
                response,
            ),
            compare_field(
                "registration_number",
                &identity.registration_number,
                doc.extracted_registration.as_deref(),
                doc.registration_match,
                response,
            ),
            compare_field(
                "specialization",
                &identity.specialization,
                doc.extracted_specialization.as_deref(),
                doc.specialization_match,
                response,
            ),
        ],
        notes: doc.notes.clone().unwrap_or_default(),
    }
}

/// Field matches default to a pass. Only an explicit `false` counts: first
/// the per-document boolean, then the response-level `matches` map. A field
/// the service never evaluated is not held against the doctor.
fn compare_field(
    field: &str,
    form_value: &str,
    extracted: Option<&str>,
    doc_level: Option<bool>,
    response: &VerificationResponse,
) -> FieldComparison {
    let response_level = response.matches.get(&format!("{field}_match")).copied();
    FieldComparison {
        field: field.to_string(),
        form_value: form_value.to_string(),
        extracted_value: extracted.unwrap_or("Not found").to_string(),
        matched: doc_level.or(response_level).unwrap_or(true),
    }
}

fn clamp_score(value: Option<f64>) -> f64 {
    match value {
        Some(score) if score.is_finite() => score.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> IdentityFields {
        IdentityFields {
            name: "Dr. Asha Rao".into(),
            country: "India".into(),
            registration_number: "MH-12345".into(),
            specialization: "Cardiology".into(),
        }
    }

    fn response(json: serde_json::Value) -> VerificationResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn approved_with_empty_analysis_keeps_score_and_empty_documents() {
        let raw = response(serde_json::json!({
            "status": "approved",
            "confidence_score": 92,
            "document_analysis": []
        }));

        let verdict = VerificationVerdict::from_response(raw, &identity());
        assert_eq!(verdict.status, VerdictStatus::Approved);
        assert_eq!(verdict.overall_score, 92.0);
        assert!(verdict.documents.is_empty());
        assert!(!verdict.has_analysis());
        assert!(verdict.is_approved());
    }

    #[test]
    fn rejected_ai_generated_document_is_flagged() {
        let raw = response(serde_json::json!({
            "status": "rejected",
            "confidence_score": 40,
            "document_analysis": [{
                "authenticity_score": 30,
                "is_ai_generated": true,
                "ai_indicators": ["uniform font"]
            }]
        }));

        let verdict = VerificationVerdict::from_response(raw, &identity());
        assert_eq!(verdict.status, VerdictStatus::Rejected);
        assert_eq!(verdict.overall_score, 40.0);
        assert!(!verdict.is_approved());
        assert!(verdict.has_ai_flag());
        let doc = &verdict.documents[0];
        assert_eq!(doc.authenticity_score, 30.0);
        assert_eq!(doc.ai_indicators, vec!["uniform font".to_string()]);
    }

    #[test]
    fn missing_everything_defaults_conservatively() {
        let verdict =
            VerificationVerdict::from_response(VerificationResponse::default(), &identity());
        assert_eq!(verdict.status, VerdictStatus::Rejected);
        assert_eq!(verdict.overall_score, 0.0);
        assert!(verdict.documents.is_empty());
        assert!(verdict.issues.is_empty());
        assert_eq!(verdict.recommendation, "");
    }

    #[test]
    fn unknown_status_is_rejected_never_approved() {
        let raw = response(serde_json::json!({ "status": "APPROVED!!", "confidence_score": 99 }));
        let verdict = VerificationVerdict::from_response(raw, &identity());
        assert_eq!(verdict.status, VerdictStatus::Rejected);
    }

    #[test]
    fn field_matches_default_to_pass_without_negative_signal() {
        let raw = response(serde_json::json!({
            "status": "manual_review",
            "confidence_score": 60,
            "document_analysis": [{ "extracted_name": "Asha Rao" }]
        }));

        let verdict = VerificationVerdict::from_response(raw, &identity());
        let doc = &verdict.documents[0];
        assert!(doc.field_comparisons.iter().all(|c| c.matched));
        assert_eq!(doc.field_comparisons[0].extracted_value, "Asha Rao");
        assert_eq!(doc.field_comparisons[1].extracted_value, "Not found");
    }

    #[test]
    fn explicit_mismatch_wins_at_either_level() {
        let raw = response(serde_json::json!({
            "status": "manual_review",
            "matches": { "registration_match": false },
            "document_analysis": [{ "name_match": false }]
        }));

        let verdict = VerificationVerdict::from_response(raw, &identity());
        let doc = &verdict.documents[0];
        let by_field = |f: &str| {
            doc.field_comparisons
                .iter()
                .find(|c| c.field == f)
                .unwrap()
                .matched
        };
        assert!(!by_field("name"));
        assert!(!by_field("registration_number"));
        assert!(by_field("specialization"));
    }

    #[test]
    fn severe_blur_implies_blurry() {
        let raw = response(serde_json::json!({
            "status": "rejected",
            "document_analysis": [{ "blur_severity": "severe" }]
        }));

        let verdict = VerificationVerdict::from_response(raw, &identity());
        let doc = &verdict.documents[0];
        assert!(doc.is_blurry);
        assert_eq!(doc.blur_severity, BlurSeverity::Severe);
    }

    #[test]
    fn scores_are_clamped_to_percentage_range() {
        let raw = response(serde_json::json!({
            "status": "approved",
            "confidence_score": 250.0,
            "document_analysis": [{ "authenticity_score": -12.0 }]
        }));

        let verdict = VerificationVerdict::from_response(raw, &identity());
        assert_eq!(verdict.overall_score, 100.0);
        assert_eq!(verdict.documents[0].authenticity_score, 0.0);
    }
}
