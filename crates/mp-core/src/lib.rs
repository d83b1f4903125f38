//! # mp-core
//!
//! Core domain models and business logic for the MedPortal onboarding client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod document;
pub mod ports;
pub mod reference;
pub mod registration;
pub mod verification;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use document::{DocumentFile, DocumentStagingStore, DocumentTypeTag, StagedDocument};
pub use registration::{AccountId, RegisteredAccount, RegistrationDraft};
pub use verification::{VerdictStatus, VerificationVerdict};
pub use wizard::{RegistrationStateMachine, WizardAction, WizardEvent, WizardStep};
