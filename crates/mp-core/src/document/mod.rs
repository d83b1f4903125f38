//! Credential documents: staging, validation, and country requirements.

pub mod mime;
pub mod requirements;
pub mod staged;
pub mod store;

pub use mime::{MimeType, ALLOWED_DOCUMENT_TYPES};
pub use requirements::{CountryRequirement, DocumentSpec};
pub use staged::{DocumentFile, DocumentTypeTag, PreviewHandle, StagedDocument};
pub use store::{DocumentStagingStore, UploadError, MAX_DOCUMENT_BYTES};
