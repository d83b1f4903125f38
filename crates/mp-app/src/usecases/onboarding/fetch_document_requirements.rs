use std::sync::Arc;

use log::warn;

use mp_core::document::CountryRequirement;
use mp_core::ports::ReferenceDataPort;
use mp_core::reference::default_document_requirements;

/// Fetches which documents the selected country requires.
///
/// Unreachable endpoint degrades to the generic degree-plus-license
/// requirement so the wizard never blocks on a lookup.
pub struct FetchDocumentRequirements {
    reference: Arc<dyn ReferenceDataPort>,
}

impl FetchDocumentRequirements {
    pub fn new(reference: Arc<dyn ReferenceDataPort>) -> Self {
        Self { reference }
    }

    pub async fn execute(&self, country: &str) -> CountryRequirement {
        match self.reference.fetch_document_requirements(country).await {
            Ok(requirement) => requirement,
            Err(err) => {
                warn!("failed to fetch document requirements for {country}: {err:#}, using defaults");
                default_document_requirements(country)
            }
        }
    }
}
