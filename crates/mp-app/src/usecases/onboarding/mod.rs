//! Onboarding use cases.
//!
//! This module contains the doctor onboarding wizard: the orchestrator that
//! drives the state machine, plus the capability use cases it delegates the
//! actual backend work to.

mod context;
pub mod orchestrator;

pub mod complete_login;
pub mod fetch_document_requirements;
pub mod finalize_registration;
pub mod load_countries;
pub mod load_specializations;
pub mod submit_verification;

pub use complete_login::CompleteLogin;
pub use fetch_document_requirements::FetchDocumentRequirements;
pub use finalize_registration::FinalizeRegistration;
pub use load_countries::LoadCountries;
pub use load_specializations::LoadSpecializations;
pub use orchestrator::OnboardingOrchestrator;
pub use submit_verification::SubmitVerification;
