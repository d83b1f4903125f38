//! Raw wire shape of `POST /auth/verify-documents`.
//!
//! Every field is optional or defaulted: the verification service response is
//! not trusted, and a missing or oddly-shaped payload must never fail
//! deserialization. Normalization into a [`VerificationVerdict`] happens in
//! [`super::verdict`].
//!
//! [`VerificationVerdict`]: super::VerificationVerdict

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level verification payload as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerificationResponse {
    pub status: Option<String>,
    pub confidence_score: Option<f64>,
    /// Response-level match booleans keyed `name_match`, `registration_match`,
    /// `specialization_match`, `country_match`.
    pub matches: HashMap<String, bool>,
    pub issues: Vec<String>,
    pub recommendation: Option<String>,
    pub document_analysis: Vec<RawDocumentAnalysis>,
}

/// One entry of `document_analysis`, as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocumentAnalysis {
    pub document_type: Option<String>,
    pub authenticity_score: Option<f64>,
    pub is_ai_generated: Option<bool>,
    pub ai_generation_confidence: Option<f64>,
    pub ai_indicators: Vec<String>,
    pub is_blurry: Option<bool>,
    pub blur_severity: Option<String>,
    pub extracted_name: Option<String>,
    pub extracted_registration: Option<String>,
    pub extracted_specialization: Option<String>,
    /// Per-document match booleans; only an explicit `false` counts as a
    /// mismatch signal.
    pub name_match: Option<bool>,
    pub registration_match: Option<bool>,
    pub specialization_match: Option<bool>,
    pub notes: Option<String>,
}
