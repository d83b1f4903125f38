use std::sync::Arc;

use log::warn;

use mp_core::ports::ReferenceDataPort;
use mp_core::reference::fallback_specializations;

/// Loads the specialization list for the professional step selector, with
/// the bundled list as fallback.
pub struct LoadSpecializations {
    reference: Arc<dyn ReferenceDataPort>,
}

impl LoadSpecializations {
    pub fn new(reference: Arc<dyn ReferenceDataPort>) -> Self {
        Self { reference }
    }

    pub async fn execute(&self) -> Vec<String> {
        match self.reference.fetch_specializations().await {
            Ok(specializations) if !specializations.is_empty() => specializations,
            Ok(_) => {
                warn!("specialization endpoint returned an empty list, using bundled list");
                fallback_specializations()
            }
            Err(err) => {
                warn!("failed to fetch specializations: {err:#}, using bundled list");
                fallback_specializations()
            }
        }
    }
}
