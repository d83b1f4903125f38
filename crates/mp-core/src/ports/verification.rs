use async_trait::async_trait;

use crate::document::StagedDocument;
use crate::ports::errors::PortalApiError;
use crate::registration::IdentityFields;
use crate::verification::VerificationResponse;

#[async_trait]
pub trait VerificationPort: Send + Sync {
    /// Submits the identity fields and every staged file in a single
    /// multipart request, ordered as staged.
    ///
    /// Returns the portal's raw analysis payload; normalization into a
    /// verdict happens in the domain, not here.
    async fn verify_documents(
        &self,
        identity: &IdentityFields,
        documents: &[StagedDocument],
    ) -> Result<VerificationResponse, PortalApiError>;
}
