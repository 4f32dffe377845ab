//! Change Watcher
//!
//! Wraps a host watch handle into a `Subscription` that forwards every
//! normalized `ChangeEvent` to its handler. No filtering, debouncing or
//! coalescing happens here.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{WatchError, WatchHandle, WatchService};
use crate::domain::value_objects::{ChangeEvent, ChangeKind, WatchTarget};

/// One live subscription. Listening starts in the constructor.
pub struct Subscription {
    target: WatchTarget,
    handle: Option<Box<dyn WatchHandle>>,
    active: Arc<AtomicBool>,
    last_event_kind: Arc<Mutex<Option<ChangeKind>>>,
}

impl Subscription {
    /// Subscribe to one exact file.
    pub fn exact<F>(
        path: impl Into<PathBuf>,
        service: &dyn WatchService,
        handler: F,
    ) -> Result<Self, WatchError>
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        let target = WatchTarget::exact(path)?;
        Self::subscribe(target, service, handler)
    }

    /// Subscribe to a glob pattern relative to the workspace root.
    pub fn pattern<F>(glob: &str, service: &dyn WatchService, handler: F) -> Result<Self, WatchError>
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        let target = WatchTarget::pattern(glob)?;
        Self::subscribe(target, service, handler)
    }

    fn subscribe<F>(
        target: WatchTarget,
        service: &dyn WatchService,
        handler: F,
    ) -> Result<Self, WatchError>
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let last_event_kind = Arc::new(Mutex::new(None));

        let forward_active = active.clone();
        let forward_kind = last_event_kind.clone();
        let handle = service.watch(
            &target,
            Box::new(move |event: ChangeEvent| {
                // A host thread may still hold an event after release.
                if !forward_active.load(Ordering::SeqCst) {
                    return;
                }
                if let Ok(mut kind) = forward_kind.lock() {
                    *kind = Some(event.kind);
                }
                handler(event);
            }),
        )?;

        tracing::debug!(target = %target, "subscribed");

        Ok(Self {
            target,
            handle: Some(handle),
            active,
            last_event_kind,
        })
    }

    pub fn target(&self) -> &WatchTarget {
        &self.target
    }

    /// Identity: the literal path or pattern this subscription was created with
    pub fn key(&self) -> String {
        self.target.key()
    }

    pub fn last_event_kind(&self) -> Option<ChangeKind> {
        self.last_event_kind.lock().ok().and_then(|kind| *kind)
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the host watch. Later calls are no-ops.
    pub fn dispose(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        if let Some(mut handle) = self.handle.take() {
            handle.release();
            tracing::debug!(target = %self.target, "released");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("target", &self.target)
            .field("active", &self.is_active())
            .field("last_event_kind", &self.last_event_kind())
            .finish()
    }
}
