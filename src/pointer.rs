//! Process-wide pointer-position observable.
//!
//! One hub replaces per-view global listeners: graph views subscribe on mount
//! and drop their subscription on unmount, so coexisting views never install
//! duplicate listeners.

use std::sync::{Arc, Mutex, Weak};

use crate::core::Point;

type Listener = Box<dyn Fn(Point) + Send + 'static>;

#[derive(Default)]
struct HubInner {
    last: Option<Point>,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Arc<Mutex<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new pointer position to every live subscriber.
    ///
    /// Listeners run on the publishing (single logical) thread and must not
    /// publish or subscribe re-entrantly.
    pub fn publish(&self, position: Point) {
        let mut inner = self.lock();
        inner.last = Some(position);
        for (_, listener) in &inner.listeners {
            listener(position);
        }
    }

    /// Latest published position, if any.
    pub fn last(&self) -> Option<Point> {
        self.lock().last
    }

    /// Register a listener. Dropping the returned subscription unregisters it.
    pub fn subscribe(&self, listener: impl Fn(Point) + Send + 'static) -> PointerSubscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        PointerSubscription {
            hub: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubInner> {
        // A poisoned lock only means a listener panicked mid-publish; the
        // position state is still coherent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("PointerHub")
            .field("last", &inner.last)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

/// Scoped registration handle; unsubscribes on drop.
pub struct PointerSubscription {
    hub: Weak<Mutex<HubInner>>,
    id: u64,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            let mut inner = hub.lock().unwrap_or_else(|e| e.into_inner());
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("id", &self.id)
            .finish()
    }
}
