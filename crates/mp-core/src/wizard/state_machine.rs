//! Wizard state machine.
//!
//! Defines a pure state transition function for the doctor onboarding flow.
//! The machine owns the registration draft; events carry submitted form data
//! and the snapshots needed to evaluate guards, so transitions run without
//! any I/O. Side-effects come back as [`WizardAction`]s for the caller to
//! execute.

use tracing::warn;

use super::action::WizardAction;
use super::error::{StepFailure, ValidationError};
use super::event::WizardEvent;
use super::step::WizardStep;
use crate::document::{DocumentSpec, DocumentTypeTag};
use crate::registration::RegistrationDraft;

/// Pure wizard state machine: current step plus the draft it guards.
///
/// 纯状态机：不包含副作用。
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationStateMachine {
    step: WizardStep,
    draft: RegistrationDraft,
}

impl Default for RegistrationStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationStateMachine {
    pub fn new() -> Self {
        Self {
            step: WizardStep::initial(),
            draft: RegistrationDraft::new(),
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Applies one event, replacing the current step and returning the
    /// actions the caller must execute.
    pub fn handle_event(&mut self, event: WizardEvent) -> Vec<WizardAction> {
        let step = std::mem::replace(&mut self.step, WizardStep::initial());
        let (next, actions) = Self::transition(step, &mut self.draft, event);
        self.step = next;
        actions
    }

    pub fn transition(
        step: WizardStep,
        draft: &mut RegistrationDraft,
        event: WizardEvent,
    ) -> (WizardStep, Vec<WizardAction>) {
        match (step, event) {
            (
                WizardStep::Account { .. },
                WizardEvent::SubmitAccount {
                    email,
                    password,
                    confirm_password,
                },
            ) => {
                // The draft keeps whatever was typed, valid or not, so a
                // corrected resubmission does not lose the other fields.
                draft.email = email.trim().to_string();
                draft.password = password;
                draft.confirm_password = confirm_password;

                if let Some(error) = validate_account(draft) {
                    return (
                        WizardStep::Account {
                            error: Some(error.into()),
                        },
                        Vec::new(),
                    );
                }
                (WizardStep::Professional { error: None }, Vec::new())
            }
            (
                WizardStep::Professional { .. },
                WizardEvent::SubmitProfessional {
                    name,
                    country,
                    registration_number,
                    specialization,
                    hospital,
                    phone,
                },
            ) => {
                let country = country.trim().to_string();
                let country_changed = country != draft.country;
                draft.name = name.trim().to_string();
                draft.country = country;
                draft.registration_number = registration_number.trim().to_string();
                draft.specialization = specialization.trim().to_string();
                draft.hospital = hospital.filter(|h| !h.trim().is_empty());
                draft.phone = phone.filter(|p| !p.trim().is_empty());

                // A country switch invalidates the staged documents and the
                // cached requirement even when another field fails validation.
                let actions = if country_changed {
                    country_switch_actions(&draft.country)
                } else {
                    Vec::new()
                };

                if let Some(error) = validate_professional(draft) {
                    return (
                        WizardStep::Professional {
                            error: Some(error.into()),
                        },
                        actions,
                    );
                }
                (WizardStep::Documents { error: None }, actions)
            }
            (WizardStep::Professional { error }, WizardEvent::CountryChanged { country }) => {
                let country = country.trim().to_string();
                if country == draft.country {
                    return (WizardStep::Professional { error }, Vec::new());
                }
                draft.country = country;
                let actions = country_switch_actions(&draft.country);
                (WizardStep::Professional { error }, actions)
            }
            (WizardStep::Documents { error }, WizardEvent::BypassCodeChanged { code }) => {
                draft.bypass_code = code;
                (WizardStep::Documents { error }, Vec::new())
            }
            (WizardStep::Documents { .. }, WizardEvent::RequestVerification { staged, required }) => {
                if draft.has_bypass_code() {
                    return (
                        WizardStep::SubmittingRegistration {
                            skip_verification: true,
                            verdict: None,
                        },
                        vec![WizardAction::FinalizeRegistration {
                            skip_verification: true,
                        }],
                    );
                }
                let missing = missing_document_names(&staged, &required);
                if !missing.is_empty() {
                    return (
                        WizardStep::Documents {
                            error: Some(ValidationError::MissingDocuments { missing }.into()),
                        },
                        Vec::new(),
                    );
                }
                (
                    WizardStep::SubmittingVerification,
                    vec![WizardAction::SubmitForVerification],
                )
            }
            (WizardStep::Professional { .. }, WizardEvent::GoBack) => {
                (WizardStep::Account { error: None }, Vec::new())
            }
            (WizardStep::Documents { .. }, WizardEvent::GoBack) => {
                (WizardStep::Professional { error: None }, Vec::new())
            }
            // Backing out does not cancel the in-flight request; a late
            // response is handled by the arms below.
            (WizardStep::SubmittingVerification, WizardEvent::GoBack) => {
                (WizardStep::Documents { error: None }, Vec::new())
            }
            (
                WizardStep::SubmittingVerification,
                WizardEvent::VerificationSucceeded { country, verdict },
            ) => {
                if country != draft.country {
                    warn!(
                        submitted = %country,
                        current = %draft.country,
                        "discarding stale verification verdict"
                    );
                    return (WizardStep::Documents { error: None }, Vec::new());
                }
                accept_verdict(verdict)
            }
            (
                WizardStep::Documents { error },
                WizardEvent::VerificationSucceeded { country, verdict },
            ) => {
                // Late arrival after backing out. Still relevant as long as
                // the draft country has not changed underneath it.
                if country != draft.country {
                    warn!(
                        submitted = %country,
                        current = %draft.country,
                        "discarding stale verification verdict"
                    );
                    return (WizardStep::Documents { error }, Vec::new());
                }
                accept_verdict(verdict)
            }
            (
                WizardStep::SubmittingVerification,
                WizardEvent::VerificationFailed { country, message },
            ) => {
                if country != draft.country {
                    return (WizardStep::Documents { error: None }, Vec::new());
                }
                (
                    WizardStep::Documents {
                        error: Some(StepFailure::Submission(message)),
                    },
                    Vec::new(),
                )
            }
            (WizardStep::Documents { error }, WizardEvent::VerificationFailed { country, message }) => {
                if country != draft.country {
                    return (WizardStep::Documents { error }, Vec::new());
                }
                (
                    WizardStep::Documents {
                        error: Some(StepFailure::Submission(message)),
                    },
                    Vec::new(),
                )
            }
            (WizardStep::VerificationResult { .. }, WizardEvent::RetryWithNewDocuments) => {
                // The stale verdict lives in the variant being left; dropping
                // it here is the whole cleanup.
                (WizardStep::Documents { error: None }, Vec::new())
            }
            (WizardStep::VerificationResult { .. }, WizardEvent::ResubmitDocuments) => (
                WizardStep::SubmittingVerification,
                vec![WizardAction::SubmitForVerification],
            ),
            (
                WizardStep::VerificationResult { verdict, error },
                WizardEvent::CompleteRegistration,
            ) => {
                if !verdict.is_approved() {
                    return (WizardStep::VerificationResult { verdict, error }, Vec::new());
                }
                (
                    WizardStep::SubmittingRegistration {
                        skip_verification: false,
                        verdict: Some(verdict),
                    },
                    vec![WizardAction::FinalizeRegistration {
                        skip_verification: false,
                    }],
                )
            }
            (
                WizardStep::SubmittingRegistration { .. },
                WizardEvent::RegistrationSucceeded { account },
            ) => (WizardStep::Complete { account }, Vec::new()),
            (
                WizardStep::SubmittingRegistration {
                    skip_verification,
                    verdict,
                },
                WizardEvent::RegistrationFailed { message },
            ) => match verdict {
                Some(verdict) if !skip_verification => (
                    WizardStep::VerificationResult {
                        verdict,
                        error: Some(StepFailure::Submission(message)),
                    },
                    Vec::new(),
                ),
                _ => (
                    WizardStep::Documents {
                        error: Some(StepFailure::Submission(message)),
                    },
                    Vec::new(),
                ),
            },
            (step, _event) => (step, Vec::new()),
        }
    }
}

/// An approved verdict moves straight into account creation; anything else
/// lands on the result step with retry/resubmit as the only ways out.
fn accept_verdict(verdict: crate::verification::VerificationVerdict) -> (WizardStep, Vec<WizardAction>) {
    if verdict.is_approved() {
        return (
            WizardStep::SubmittingRegistration {
                skip_verification: false,
                verdict: Some(verdict),
            },
            vec![WizardAction::FinalizeRegistration {
                skip_verification: false,
            }],
        );
    }
    (
        WizardStep::VerificationResult {
            verdict,
            error: None,
        },
        Vec::new(),
    )
}

const MIN_PASSWORD_LEN: usize = 8;

fn validate_account(draft: &RegistrationDraft) -> Option<ValidationError> {
    if draft.email.is_empty() {
        return Some(ValidationError::EmailRequired);
    }
    if draft.password.is_empty() {
        return Some(ValidationError::PasswordRequired);
    }
    if draft.password.len() < MIN_PASSWORD_LEN {
        return Some(ValidationError::PasswordTooShort {
            min_len: MIN_PASSWORD_LEN,
        });
    }
    if draft.password != draft.confirm_password {
        return Some(ValidationError::PasswordMismatch);
    }
    None
}

fn validate_professional(draft: &RegistrationDraft) -> Option<ValidationError> {
    if draft.name.is_empty() {
        return Some(ValidationError::NameRequired);
    }
    if draft.country.is_empty() {
        return Some(ValidationError::CountryRequired);
    }
    if draft.registration_number.is_empty() {
        return Some(ValidationError::RegistrationNumberRequired);
    }
    if draft.specialization.is_empty() {
        return Some(ValidationError::SpecializationRequired);
    }
    None
}

fn country_switch_actions(country: &str) -> Vec<WizardAction> {
    // Reset must run before the fetch so no stale document survives into
    // the new requirement set.
    vec![
        WizardAction::ResetStagedDocuments,
        WizardAction::FetchDocumentRequirements {
            country: country.to_string(),
        },
    ]
}

fn missing_document_names(staged: &[DocumentTypeTag], required: &[DocumentSpec]) -> Vec<String> {
    required
        .iter()
        .filter(|spec| !staged.contains(&spec.doc_type))
        .map(|spec| spec.name.clone())
        .collect()
}
