//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the HTTP client and the preview backend.

pub mod errors;
pub mod preview_source;
pub mod reference_data;
pub mod registration;
pub mod verification;
pub mod wizard_event;

pub use errors::PortalApiError;
pub use preview_source::PreviewSourcePort;
pub use reference_data::ReferenceDataPort;
pub use registration::RegistrationPort;
pub use verification::VerificationPort;
pub use wizard_event::WizardEventPort;

#[cfg(test)]
pub use preview_source::MockPreviewSource;
