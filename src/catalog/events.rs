use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::models::DocumentId;

/// A change notification from the document host.
///
/// Delivered at most once per change, with no ordering guarantee relative to
/// an in-flight rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The document was created or its content changed.
    Changed(DocumentId),
    /// The document no longer exists.
    Deleted(DocumentId),
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Observer list for the payload-free catalog-changed notification.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
}

impl Listeners {
    pub(crate) fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Invokes every listener. The list is copied first so listeners may
    /// subscribe or unsubscribe without deadlocking.
    pub(crate) fn notify(&self) {
        let snapshot: Vec<Listener> = self.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in snapshot {
            listener();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn notify_reaches_every_subscriber() {
        let listeners = Listeners::default();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let hits = Arc::clone(&hits);
            listeners.subscribe(Arc::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }
        listeners.notify();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let listeners = Listeners::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let id = listeners.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify();

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
