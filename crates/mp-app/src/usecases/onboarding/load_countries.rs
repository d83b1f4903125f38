use std::sync::Arc;

use log::warn;

use mp_core::ports::ReferenceDataPort;
use mp_core::reference::fallback_countries;

/// Loads the country list for the professional step selector.
///
/// The portal endpoint is preferred; when it is unreachable the bundled
/// list keeps the form usable.
pub struct LoadCountries {
    reference: Arc<dyn ReferenceDataPort>,
}

impl LoadCountries {
    pub fn new(reference: Arc<dyn ReferenceDataPort>) -> Self {
        Self { reference }
    }

    pub async fn execute(&self) -> Vec<String> {
        match self.reference.fetch_countries().await {
            Ok(countries) if !countries.is_empty() => countries,
            Ok(_) => {
                warn!("country endpoint returned an empty list, using bundled list");
                fallback_countries()
            }
            Err(err) => {
                warn!("failed to fetch countries: {err:#}, using bundled list");
                fallback_countries()
            }
        }
    }
}
