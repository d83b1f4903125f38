//! Registration draft.
//!
//! Working copy of everything the doctor has typed into the wizard. Created
//! when the wizard mounts, discarded on success or navigation away; never
//! persisted.

use serde::{Deserialize, Serialize};

/// All form fields collected across the wizard steps.
///
/// 注册向导各步骤收集的全部表单字段。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    // Account step
    pub email: String,
    pub password: String,
    pub confirm_password: String,

    // Professional step
    pub name: String,
    pub country: String,
    pub registration_number: String,
    pub specialization: String,
    pub hospital: Option<String>,
    pub phone: Option<String>,

    /// Trusted-bypass code. Non-empty means document verification is skipped
    /// and the code is forwarded to the server as `magic_code`.
    pub bypass_code: Option<String>,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a non-blank bypass code has been entered.
    pub fn has_bypass_code(&self) -> bool {
        self.bypass_code
            .as_deref()
            .is_some_and(|code| !code.trim().is_empty())
    }

    /// The subset of fields the verification service cross-checks against
    /// the uploaded documents.
    pub fn identity_fields(&self) -> IdentityFields {
        IdentityFields {
            name: self.name.clone(),
            country: self.country.clone(),
            registration_number: self.registration_number.clone(),
            specialization: self.specialization.clone(),
        }
    }

    /// Builds the account-creation request body. The bypass code is only
    /// attached when `include_bypass_code` is set; the server treats its
    /// presence as a request for instant approval.
    pub fn to_register_request(&self, include_bypass_code: bool) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            name: self.name.clone(),
            country: self.country.clone(),
            registration_number: self.registration_number.clone(),
            specialization: self.specialization.clone(),
            hospital: self.hospital.clone(),
            phone: self.phone.clone(),
            magic_code: if include_bypass_code {
                self.bypass_code.clone().filter(|c| !c.trim().is_empty())
            } else {
                None
            },
        }
    }
}

/// Draft fields submitted alongside documents for cross-checking.
///
/// 随文件一并提交、用于交叉核验的表单字段。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFields {
    pub name: String,
    pub country: String,
    pub registration_number: String,
    pub specialization: String,
}

/// Wire body for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub country: String,
    pub registration_number: String,
    pub specialization: String,
    pub hospital: Option<String>,
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bypass_code_does_not_count() {
        let mut draft = RegistrationDraft::new();
        assert!(!draft.has_bypass_code());

        draft.bypass_code = Some("   ".into());
        assert!(!draft.has_bypass_code());

        draft.bypass_code = Some("JUDGE2024".into());
        assert!(draft.has_bypass_code());
    }

    #[test]
    fn register_request_omits_magic_code_unless_asked() {
        let mut draft = RegistrationDraft::new();
        draft.email = "doc@example.com".into();
        draft.bypass_code = Some("JUDGE2024".into());

        let without = draft.to_register_request(false);
        assert_eq!(without.magic_code, None);

        let with = draft.to_register_request(true);
        assert_eq!(with.magic_code.as_deref(), Some("JUDGE2024"));

        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("magic_code").is_none());
    }
}
