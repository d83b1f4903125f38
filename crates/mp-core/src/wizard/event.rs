use crate::document::{DocumentSpec, DocumentTypeTag};
use crate::registration::RegisteredAccount;
use crate::verification::VerificationVerdict;

/// Events that drive the wizard.
///
/// 驱动注册向导的事件。
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum WizardEvent {
    /// Submit the account credentials form.
    ///
    /// 提交账户凭证表单。
    SubmitAccount {
        email: String,
        password: String,
        confirm_password: String,
    },
    /// Submit the professional identity form.
    ///
    /// 提交执业信息表单。
    SubmitProfessional {
        name: String,
        country: String,
        registration_number: String,
        specialization: String,
        hospital: Option<String>,
        phone: Option<String>,
    },
    /// Country selection changed while editing the professional form.
    ///
    /// 执业信息表单中切换国家。
    CountryChanged { country: String },
    /// Bypass code edited on the documents step.
    ///
    /// 证件页填写跳过验证码。
    BypassCodeChanged { code: Option<String> },
    /// Navigate back.
    ///
    /// 返回上一步。
    GoBack,
    /// User asked to verify. Carries a snapshot of the staging store and the
    /// active requirement so the guard can run without I/O.
    ///
    /// 用户请求验证。
    RequestVerification {
        staged: Vec<DocumentTypeTag>,
        required: Vec<DocumentSpec>,
    },
    /// Verification response arrived (orchestrator callback). `country` is
    /// the draft country the request was submitted with.
    ///
    /// 验证结果回调。
    VerificationSucceeded {
        country: String,
        verdict: VerificationVerdict,
    },
    /// Verification request failed (orchestrator callback).
    ///
    /// 验证请求失败回调。
    VerificationFailed { country: String, message: String },
    /// Go back to the documents step to replace documents, dropping the
    /// current verdict.
    ///
    /// 返回证件页重新上传，丢弃当前结果。
    RetryWithNewDocuments,
    /// Submit the same staged documents again.
    ///
    /// 重新提交相同证件。
    ResubmitDocuments,
    /// User asked to finish registration from an approved verdict.
    ///
    /// 在已通过的结果页上请求完成注册。
    CompleteRegistration,
    /// Account creation succeeded (orchestrator callback).
    ///
    /// 注册成功回调。
    RegistrationSucceeded { account: RegisteredAccount },
    /// Account creation failed (orchestrator callback).
    ///
    /// 注册失败回调。
    RegistrationFailed { message: String },
}

impl WizardEvent {
    /// Event name for logging. The `Debug` form would include credential
    /// fields, so log sites use this instead.
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::SubmitAccount { .. } => "SubmitAccount",
            WizardEvent::SubmitProfessional { .. } => "SubmitProfessional",
            WizardEvent::CountryChanged { .. } => "CountryChanged",
            WizardEvent::BypassCodeChanged { .. } => "BypassCodeChanged",
            WizardEvent::GoBack => "GoBack",
            WizardEvent::RequestVerification { .. } => "RequestVerification",
            WizardEvent::VerificationSucceeded { .. } => "VerificationSucceeded",
            WizardEvent::VerificationFailed { .. } => "VerificationFailed",
            WizardEvent::RetryWithNewDocuments => "RetryWithNewDocuments",
            WizardEvent::ResubmitDocuments => "ResubmitDocuments",
            WizardEvent::CompleteRegistration => "CompleteRegistration",
            WizardEvent::RegistrationSucceeded { .. } => "RegistrationSucceeded",
            WizardEvent::RegistrationFailed { .. } => "RegistrationFailed",
        }
    }
}
