//! Country-specific document requirements.
//!
//! Fetched per selected country; drives which staging slots must be filled
//! before verification can proceed.

use serde::{Deserialize, Serialize};

use super::staged::DocumentTypeTag;

/// Display metadata for one required or optional document slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSpec {
    #[serde(rename = "type")]
    pub doc_type: DocumentTypeTag,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl DocumentSpec {
    pub fn new(
        doc_type: impl Into<DocumentTypeTag>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: doc_type.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Ordered required/optional document sets for one country, plus the
/// regulatory metadata the backend sends for display.
///
/// 单个国家/地区的证件要求。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRequirement {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub required_documents: Vec<DocumentSpec>,
    #[serde(default)]
    pub optional_documents: Vec<DocumentSpec>,
    #[serde(default)]
    pub registration_format: String,
    #[serde(default)]
    pub regulatory_body: String,
    #[serde(default)]
    pub notes: String,
}

impl CountryRequirement {
    /// Tags of the required documents, in the order the backend listed them.
    pub fn required_types(&self) -> Vec<DocumentTypeTag> {
        self.required_documents
            .iter()
            .map(|spec| spec.doc_type.clone())
            .collect()
    }

    /// Display name for a tag, falling back to the tag itself for types the
    /// requirement does not mention.
    pub fn display_name(&self, tag: &DocumentTypeTag) -> String {
        self.required_documents
            .iter()
            .chain(self.optional_documents.iter())
            .find(|spec| &spec.doc_type == tag)
            .map(|spec| spec.name.clone())
            .unwrap_or_else(|| tag.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_requirement_shape() {
        let json = serde_json::json!({
            "country": "India",
            "required_documents": [
                {"type": "degree_certificate", "name": "MBBS/MD/MS Degree Certificate",
                 "description": "From MCI/NMC recognized university"},
                {"type": "medical_council_registration", "name": "State Medical Council Registration",
                 "description": "Valid SMC certificate with registration number"}
            ],
            "optional_documents": [
                {"type": "hospital_id", "name": "Current Hospital ID", "description": "Employment verification"}
            ],
            "registration_format": "State abbreviation followed by numbers (e.g., MH-12345, DL-67890)",
            "regulatory_body": "National Medical Commission (NMC)",
            "notes": "Ensure your SMC registration is current and not expired"
        });

        let req: CountryRequirement = serde_json::from_value(json).unwrap();
        assert_eq!(
            req.required_types(),
            vec![
                DocumentTypeTag::from("degree_certificate"),
                DocumentTypeTag::from("medical_council_registration"),
            ]
        );
        assert_eq!(
            req.display_name(&DocumentTypeTag::from("hospital_id")),
            "Current Hospital ID"
        );
        assert_eq!(req.display_name(&DocumentTypeTag::from("unknown")), "unknown");
    }

    #[test]
    fn missing_arrays_default_empty() {
        let req: CountryRequirement = serde_json::from_value(serde_json::json!({
            "country": "Atlantis"
        }))
        .unwrap();
        assert!(req.required_documents.is_empty());
        assert!(req.optional_documents.is_empty());
        assert!(req.registration_format.is_empty());
    }
}
