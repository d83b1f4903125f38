//! Reference data port
//!
//! Read-only lookups backing the registration form selectors. Callers are
//! expected to fall back to the built-in lists in [`crate::reference`] when
//! a fetch fails.

use async_trait::async_trait;

use crate::document::CountryRequirement;

#[async_trait]
pub trait ReferenceDataPort: Send + Sync {
    /// Country names offered by the registration form.
    async fn fetch_countries(&self) -> anyhow::Result<Vec<String>>;

    /// Medical specializations offered by the registration form.
    async fn fetch_specializations(&self) -> anyhow::Result<Vec<String>>;

    /// Document requirements for one country.
    async fn fetch_document_requirements(
        &self,
        country: &str,
    ) -> anyhow::Result<CountryRequirement>;
}
