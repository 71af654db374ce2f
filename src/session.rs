//! Process-wide session state shared between views.
//!
//! Replaces the implicit globals of the original dashboard with one injected
//! handle: the currently selected endpoint, the logo, and the snapshot
//! interval. Created once at application start, mutated only through the
//! setters below, and only after a successful server round trip — never
//! optimistically.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct SessionInner {
    endpoint_id: Option<u32>,
    endpoint_public_url: Option<String>,
    logo_url: String,
    snapshot_interval: String,
}

/// Cloneable handle to the shared session; all clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct Session(Arc<Mutex<SessionInner>>);

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // A panic while holding the lock leaves plain data behind, never a
        // broken invariant, so poisoning is recoverable here.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_endpoint_id(&self, id: u32) {
        self.lock().endpoint_id = Some(id);
    }

    pub fn set_endpoint_public_url(&self, url: Option<String>) {
        self.lock().endpoint_public_url = url;
    }

    pub fn update_logo(&self, logo_url: String) {
        self.lock().logo_url = logo_url;
    }

    pub fn update_snapshot_interval(&self, interval: String) {
        self.lock().snapshot_interval = interval;
    }

    pub fn endpoint_id(&self) -> Option<u32> {
        self.lock().endpoint_id
    }

    pub fn endpoint_public_url(&self) -> Option<String> {
        self.lock().endpoint_public_url.clone()
    }

    pub fn logo_url(&self) -> String {
        self.lock().logo_url.clone()
    }

    pub fn snapshot_interval(&self) -> String {
        self.lock().snapshot_interval.clone()
    }
}
