//! Wizard step errors.

use thiserror::Error;

/// Guard-predicate failures. Local and recoverable; each renders as a
/// single-line message specific to the offending field.
///
/// 步骤校验错误。
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Full name is required")]
    NameRequired,
    #[error("Country is required")]
    CountryRequired,
    #[error("Registration number is required")]
    RegistrationNumberRequired,
    #[error("Specialization is required")]
    SpecializationRequired,
    #[error("Missing required documents: {}", missing.join(", "))]
    MissingDocuments { missing: Vec<String> },
}

/// Anything that can be pinned to the current wizard step: a failed guard or
/// a failed backend submission (already reduced to its display message).
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum StepFailure {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Submission(String),
}
