//! Reference data for the registration form.

pub mod defaults;

pub use defaults::{
    default_document_requirements, fallback_countries, fallback_specializations,
    FALLBACK_COUNTRIES, FALLBACK_SPECIALIZATIONS,
};
