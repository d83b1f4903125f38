use std::sync::Arc;

use tracing::info;

use mp_core::ports::{PortalApiError, RegistrationPort};
use mp_core::registration::{RegisteredAccount, RegistrationDraft};

/// Creates the doctor account from the finished draft.
///
/// With `skip_verification` set the bypass code rides along as `magic_code`;
/// after a normal verification pass the code is withheld even if one was
/// typed.
pub struct FinalizeRegistration {
    registration: Arc<dyn RegistrationPort>,
}

impl FinalizeRegistration {
    pub fn new(registration: Arc<dyn RegistrationPort>) -> Self {
        Self { registration }
    }

    pub async fn execute(
        &self,
        draft: &RegistrationDraft,
        skip_verification: bool,
    ) -> Result<RegisteredAccount, PortalApiError> {
        let request = draft.to_register_request(skip_verification);
        let account = self.registration.register(&request).await?;
        info!(
            account_id = %account.id,
            skip_verification,
            "doctor account registered"
        );
        Ok(account)
    }
}
