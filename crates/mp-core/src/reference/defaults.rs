//! Built-in reference data.
//!
//! Local copies of the portal's country and specialization lists, used when
//! the live endpoints are unreachable so the wizard can still render its
//! selectors. The default document requirement mirrors what the portal
//! serves for countries it has no specific rules for.
//!
//! 内置参考数据，接口不可用时作为回退。

use crate::document::{CountryRequirement, DocumentSpec};

/// Countries offered by the registration form.
pub const FALLBACK_COUNTRIES: &[&str] = &[
    "India",
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Japan",
    "South Korea",
    "Singapore",
    "UAE",
    "Saudi Arabia",
    "Brazil",
    "Mexico",
    "South Africa",
    "Nigeria",
    "Egypt",
    "Kenya",
    "Pakistan",
    "Bangladesh",
    "Indonesia",
    "Malaysia",
    "Thailand",
    "Vietnam",
    "Philippines",
    "Russia",
    "Ukraine",
    "Poland",
    "Netherlands",
    "Belgium",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Switzerland",
    "Austria",
    "Italy",
    "Spain",
    "Portugal",
    "Greece",
    "Turkey",
    "Israel",
    "Iran",
    "Iraq",
    "New Zealand",
    "Argentina",
    "Chile",
    "Colombia",
    "Peru",
    "Venezuela",
];

/// Medical specializations offered by the registration form.
pub const FALLBACK_SPECIALIZATIONS: &[&str] = &[
    "Oncology",
    "Cardiology",
    "Neurology",
    "Nephrology",
    "Pulmonology",
    "Gastroenterology",
    "Endocrinology",
    "Rheumatology",
    "Dermatology",
    "Pediatrics",
    "Psychiatry",
    "Radiology",
    "General Surgery",
    "Orthopedics",
    "Ophthalmology",
    "ENT",
    "Gynecology",
    "Urology",
    "General Medicine",
    "Other",
];

pub fn fallback_countries() -> Vec<String> {
    FALLBACK_COUNTRIES.iter().map(|c| c.to_string()).collect()
}

pub fn fallback_specializations() -> Vec<String> {
    FALLBACK_SPECIALIZATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Requirement applied when no country-specific rules are known.
///
/// 未知国家的默认材料要求。
pub fn default_document_requirements(country: &str) -> CountryRequirement {
    CountryRequirement {
        country: country.to_string(),
        required_documents: vec![
            DocumentSpec::new(
                "medical_degree",
                "Medical Degree Certificate",
                "Official degree certificate from recognized medical school",
            ),
            DocumentSpec::new(
                "medical_license",
                "Medical License/Registration",
                "Valid medical practice license from regulatory authority",
            ),
        ],
        optional_documents: vec![DocumentSpec::new(
            "hospital_id",
            "Hospital/Clinic ID",
            "Current employment verification",
        )],
        registration_format: "Varies by country".to_string(),
        regulatory_body: String::new(),
        notes: "Please upload your medical credentials for verification".to_string(),
    }
}
