//! Doctor onboarding wizard.
//!
//! 医生注册向导的纯领域部分。

pub mod action;
pub mod error;
pub mod event;
pub mod state_machine;
pub mod step;

pub use action::WizardAction;
pub use error::{StepFailure, ValidationError};
pub use event::WizardEvent;
pub use state_machine::RegistrationStateMachine;
pub use step::WizardStep;
