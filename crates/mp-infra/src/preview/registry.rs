//! In-memory preview handle registry.

use std::collections::HashSet;
use std::sync::Mutex;

use log::warn;
use uuid::Uuid;

use mp_core::document::{DocumentFile, PreviewHandle};
use mp_core::ports::PreviewSourcePort;

/// Issues `preview://` URIs for staged images and tracks which are live.
///
/// The staging store promises to revoke every handle exactly once;
/// [`live_count`](Self::live_count) lets tests and diagnostics check that
/// promise. Revoking a handle twice is tolerated but logged.
///
/// 内存版预览句柄注册表。
pub struct InMemoryPreviewRegistry {
    live: Mutex<HashSet<String>>,
}

impl InMemoryPreviewRegistry {
    pub fn new() -> Self {
        Self {
            live: Mutex::new(HashSet::new()),
        }
    }

    /// Number of handles issued and not yet revoked.
    pub fn live_count(&self) -> usize {
        self.live.lock().expect("lock preview registry").len()
    }
}

impl Default for InMemoryPreviewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSourcePort for InMemoryPreviewRegistry {
    fn create(&self, _file: &DocumentFile) -> PreviewHandle {
        let uri = format!("preview://{}", Uuid::new_v4());
        self.live
            .lock()
            .expect("lock preview registry")
            .insert(uri.clone());
        PreviewHandle::new(uri)
    }

    fn revoke(&self, handle: &PreviewHandle) {
        let mut live = self.live.lock().expect("lock preview registry");
        if !live.remove(handle.as_str()) {
            warn!("revoked unknown preview handle {handle}");
        }
    }
}
