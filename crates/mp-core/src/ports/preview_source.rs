use crate::document::{DocumentFile, PreviewHandle};

/// Creates and releases preview handles for staged image documents.
///
/// The staging store owns each handle and releases it exactly once. An
/// implementation must tolerate `revoke` on a handle it no longer knows.
pub trait PreviewSourcePort: Send + Sync {
    fn create(&self, file: &DocumentFile) -> PreviewHandle;

    fn revoke(&self, handle: &PreviewHandle);
}

#[cfg(test)]
mockall::mock! {
    pub PreviewSource {}

    impl PreviewSourcePort for PreviewSource {
        fn create(&self, file: &DocumentFile) -> PreviewHandle;
        fn revoke(&self, handle: &PreviewHandle);
    }
}
