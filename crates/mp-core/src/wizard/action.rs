/// Side-effects produced by wizard transitions, executed by the
/// orchestrator.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardAction {
    /// Fetch the document requirements for a country.
    ///
    /// 拉取指定国家的证件要求。
    FetchDocumentRequirements { country: String },
    /// Release every preview handle and clear the staging store.
    ///
    /// 释放全部预览句柄并清空暂存区。
    ResetStagedDocuments,
    /// Package the staged documents with the draft identity fields and
    /// submit them for verification.
    ///
    /// 提交暂存证件进行验证。
    SubmitForVerification,
    /// Create the account. With `skip_verification` the bypass code is
    /// forwarded and no verification is attempted.
    ///
    /// 创建账户。
    FinalizeRegistration { skip_verification: bool },
}
