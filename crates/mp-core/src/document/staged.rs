//! Staged document types.
//!
//! A staged document is a file attached to one document-type slot of the
//! wizard, held locally until it is submitted for verification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::mime::MimeType;

/// Document-type tag, e.g. `medical_degree` or `medical_license`.
///
/// 证件类型标签。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DocumentTypeTag(pub String);

impl DocumentTypeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentTypeTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for DocumentTypeTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Raw file as picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub filename: String,
    pub content_type: MimeType,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(filename: impl Into<String>, content_type: MimeType, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Revocable reference to a rendered thumbnail of an uploaded image.
///
/// Issued by a [`PreviewSourcePort`](crate::ports::PreviewSourcePort)
/// implementation; the staging store is responsible for revoking it exactly
/// once.
///
/// 临时预览句柄，由 staging store 负责恰好释放一次。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One file staged under one document-type slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDocument {
    pub doc_type: DocumentTypeTag,
    pub file: DocumentFile,
    /// Present only for image content types.
    pub preview: Option<PreviewHandle>,
}
