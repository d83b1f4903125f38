use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Content types the staging store accepts. Mirrors the backend allow-list.
pub const ALLOWED_DOCUMENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "application/pdf"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn image_jpeg() -> Self {
        Self("image/jpeg".into())
    }
    pub fn image_png() -> Self {
        Self("image/png".into())
    }
    pub fn application_pdf() -> Self {
        Self("application/pdf".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the content types a staged document may carry.
    pub fn is_allowed_document(&self) -> bool {
        ALLOWED_DOCUMENT_TYPES.contains(&self.0.as_str())
    }

    /// Previews are only generated for image content (not PDF).
    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}
