use super::error::StepFailure;
use crate::registration::RegisteredAccount;
use crate::verification::VerificationVerdict;

/// Wizard step.
///
/// One tagged union instead of scattered flags: a verification request can
/// only be outstanding in [`WizardStep::SubmittingVerification`], a verdict
/// only exists inside [`WizardStep::VerificationResult`], and leaving that
/// variant drops the verdict with it.
///
/// 注册向导步骤。
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum WizardStep {
    /// Account credentials form.
    ///
    /// 账户凭证表单。
    Account { error: Option<StepFailure> },
    /// Professional identity form.
    ///
    /// 执业信息表单。
    Professional { error: Option<StepFailure> },
    /// Document staging and upload.
    ///
    /// 证件上传页。
    Documents { error: Option<StepFailure> },
    /// Verification request in flight; verify/next actions are unavailable.
    ///
    /// 验证请求进行中。
    SubmittingVerification,
    /// Verdict received and not approved, or approved with a failed
    /// finalize attempt recorded in `error`.
    ///
    /// 验证结果页。
    VerificationResult {
        verdict: VerificationVerdict,
        error: Option<StepFailure>,
    },
    /// Account-creation request in flight.
    ///
    /// 注册请求进行中。
    SubmittingRegistration {
        skip_verification: bool,
        verdict: Option<VerificationVerdict>,
    },
    /// Terminal step: the account exists.
    ///
    /// 注册完成。
    Complete { account: RegisteredAccount },
}

impl WizardStep {
    pub fn initial() -> Self {
        WizardStep::Account { error: None }
    }

    /// Short step name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Account { .. } => "account",
            WizardStep::Professional { .. } => "professional",
            WizardStep::Documents { .. } => "documents",
            WizardStep::SubmittingVerification => "submitting_verification",
            WizardStep::VerificationResult { .. } => "verification_result",
            WizardStep::SubmittingRegistration { .. } => "submitting_registration",
            WizardStep::Complete { .. } => "complete",
        }
    }

    /// Error pinned to the current step, if any.
    pub fn error(&self) -> Option<&StepFailure> {
        match self {
            WizardStep::Account { error }
            | WizardStep::Professional { error }
            | WizardStep::Documents { error }
            | WizardStep::VerificationResult { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}
