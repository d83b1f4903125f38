//! Document staging store.
//!
//! Holds the files a doctor has attached before they are submitted for
//! verification. Files are validated locally against the portal's limits so
//! an oversized or mis-typed upload never leaves the machine. Every staged
//! image owns at most one preview handle, released exactly once when the
//! document is replaced, removed, or the store is reset.
//!
//! 证件暂存区：本地校验、预览句柄的唯一所有权。

use std::sync::Arc;

use thiserror::Error;

use super::requirements::DocumentSpec;
use super::staged::{DocumentFile, DocumentTypeTag, StagedDocument};
use crate::ports::PreviewSourcePort;

/// Upload size cap, mirroring the portal's server-side limit.
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

/// Local rejection of a file before it is staged.
///
/// Messages match the portal's own rejections so the form shows the same
/// text whether the check runs locally or server-side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Invalid file type: {content_type}. Allowed: JPG, PNG, PDF")]
    UnsupportedType { content_type: String },

    #[error("File {filename} exceeds 5MB limit")]
    TooLarge { filename: String },
}

/// In-memory staging area keyed by document type.
///
/// At most one file per type; staging a second file for the same type
/// replaces the first. Insertion order is preserved so submission order
/// matches upload order.
pub struct DocumentStagingStore {
    preview_source: Arc<dyn PreviewSourcePort>,
    staged: Vec<StagedDocument>,
}

impl DocumentStagingStore {
    pub fn new(preview_source: Arc<dyn PreviewSourcePort>) -> Self {
        Self {
            preview_source,
            staged: Vec::new(),
        }
    }

    /// Validates and stages a file for one document type.
    ///
    /// A file already staged under the same type is replaced in place and
    /// its preview handle released. Previews are only created for images;
    /// PDFs stage without one.
    pub fn stage(
        &mut self,
        doc_type: DocumentTypeTag,
        file: DocumentFile,
    ) -> Result<(), UploadError> {
        if !file.content_type.is_allowed_document() {
            return Err(UploadError::UnsupportedType {
                content_type: file.content_type.to_string(),
            });
        }
        if file.len() > MAX_DOCUMENT_BYTES {
            return Err(UploadError::TooLarge {
                filename: file.filename.clone(),
            });
        }

        let preview = if file.content_type.is_image() {
            Some(self.preview_source.create(&file))
        } else {
            None
        };
        let entry = StagedDocument {
            doc_type: doc_type.clone(),
            file,
            preview,
        };

        match self.staged.iter_mut().find(|d| d.doc_type == doc_type) {
            Some(existing) => {
                if let Some(handle) = existing.preview.take() {
                    self.preview_source.revoke(&handle);
                }
                *existing = entry;
            }
            None => self.staged.push(entry),
        }
        Ok(())
    }

    /// Removes the file staged under `doc_type`, releasing its preview.
    /// Removing a type that is not staged is a no-op.
    pub fn remove(&mut self, doc_type: &DocumentTypeTag) {
        if let Some(pos) = self.staged.iter().position(|d| &d.doc_type == doc_type) {
            let mut removed = self.staged.remove(pos);
            if let Some(handle) = removed.preview.take() {
                self.preview_source.revoke(&handle);
            }
        }
    }

    /// Drops everything staged, releasing every preview handle.
    pub fn reset(&mut self) {
        for doc in &mut self.staged {
            if let Some(handle) = doc.preview.take() {
                self.preview_source.revoke(&handle);
            }
        }
        self.staged.clear();
    }

    pub fn get(&self, doc_type: &DocumentTypeTag) -> Option<&StagedDocument> {
        self.staged.iter().find(|d| &d.doc_type == doc_type)
    }

    /// Documents in upload order.
    pub fn documents(&self) -> &[StagedDocument] {
        &self.staged
    }

    /// Type tags in upload order.
    pub fn staged_types(&self) -> Vec<DocumentTypeTag> {
        self.staged.iter().map(|d| d.doc_type.clone()).collect()
    }

    /// True when every required type has a staged file.
    pub fn is_complete(&self, required: &[DocumentSpec]) -> bool {
        self.missing_types(required).is_empty()
    }

    /// Required types with no staged file, in requirement order.
    pub fn missing_types(&self, required: &[DocumentSpec]) -> Vec<DocumentTypeTag> {
        required
            .iter()
            .filter(|spec| self.get(&spec.doc_type).is_none())
            .map(|spec| spec.doc_type.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

impl Drop for DocumentStagingStore {
    fn drop(&mut self) {
        self.reset();
    }
}

impl std::fmt::Debug for DocumentStagingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStagingStore")
            .field("staged", &self.staged)
            .finish_non_exhaustive()
    }
}
