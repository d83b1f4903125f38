use async_trait::async_trait;

use crate::ports::errors::PortalApiError;
use crate::registration::{LoginSession, RegisterRequest, RegisteredAccount};

#[async_trait]
pub trait RegistrationPort: Send + Sync {
    /// Creates the doctor account on the portal.
    ///
    /// 在门户上创建医生账号。
    async fn register(&self, request: &RegisterRequest)
        -> Result<RegisteredAccount, PortalApiError>;

    /// Exchanges credentials for a session token after a successful
    /// registration.
    async fn login(
        &self,
        email: &str,
        password: &str,
        registration_number: Option<&str>,
    ) -> Result<LoginSession, PortalApiError>;
}
