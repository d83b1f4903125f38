use std::sync::Arc;

use tracing::info;

use mp_core::document::StagedDocument;
use mp_core::ports::{PortalApiError, VerificationPort};
use mp_core::registration::IdentityFields;
use mp_core::verification::VerificationVerdict;

/// Sends staged documents to the verification service and normalizes the
/// raw payload into a verdict the wizard can act on.
pub struct SubmitVerification {
    verification: Arc<dyn VerificationPort>,
}

impl SubmitVerification {
    pub fn new(verification: Arc<dyn VerificationPort>) -> Self {
        Self { verification }
    }

    pub async fn execute(
        &self,
        identity: &IdentityFields,
        documents: &[StagedDocument],
    ) -> Result<VerificationVerdict, PortalApiError> {
        let response = self
            .verification
            .verify_documents(identity, documents)
            .await?;
        let verdict = VerificationVerdict::from_response(response, identity);
        info!(
            status = ?verdict.status,
            score = verdict.overall_score,
            documents = verdict.documents.len(),
            "verification verdict received"
        );
        Ok(verdict)
    }
}
