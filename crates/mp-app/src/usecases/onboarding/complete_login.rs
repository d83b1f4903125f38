use std::sync::Arc;

use tracing::info;

use mp_core::ports::{PortalApiError, RegistrationPort};
use mp_core::registration::LoginSession;

/// Logs the freshly registered doctor in so the portal opens with a live
/// session instead of bouncing back to the login form.
pub struct CompleteLogin {
    registration: Arc<dyn RegistrationPort>,
}

impl CompleteLogin {
    pub fn new(registration: Arc<dyn RegistrationPort>) -> Self {
        Self { registration }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: &str,
        registration_number: Option<&str>,
    ) -> Result<LoginSession, PortalApiError> {
        let session = self
            .registration
            .login(email, password, registration_number)
            .await?;
        info!(account_id = %session.user.id, "post-registration login completed");
        Ok(session)
    }
}
