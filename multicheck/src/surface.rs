//! Input surfaces: fan-out hubs for keyboard events.
//!
//! An [`InputSurface`] stands in for a listenable host target (the window, a
//! table element, a pane). The host pushes [`KeyEvent`]s into it with
//! [`dispatch`](InputSurface::dispatch); consumers attach listeners with
//! [`subscribe`](InputSurface::subscribe) and hold the returned
//! [`Subscription`] for as long as they want to stay attached.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use crate::events::{EventResult, KeyEvent};

type Listener = Arc<dyn Fn(&KeyEvent) -> EventResult + Send + Sync>;
type ListenerTable = RwLock<Vec<(ListenerId, Listener)>>;

/// Unique identifier for an attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerId(usize);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// A listenable keyboard event hub.
///
/// Cheap to clone; clones share the same listener table, so identity is the
/// table itself (see [`ptr_eq`](InputSurface::ptr_eq)).
#[derive(Clone, Default)]
pub struct InputSurface {
    listeners: Arc<ListenerTable>,
}

impl InputSurface {
    /// Create a new surface with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. Dropping the returned [`Subscription`] detaches it.
    pub fn subscribe(
        &self,
        listener: impl Fn(&KeyEvent) -> EventResult + Send + Sync + 'static,
    ) -> Subscription {
        let id = ListenerId::new();
        if let Ok(mut table) = self.listeners.write() {
            table.push((id, Arc::new(listener)));
        }
        trace!("surface: listener {:?} attached", id);
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every listener.
    ///
    /// The listener list is snapshotted first, so a listener may subscribe or
    /// unsubscribe (including itself) during delivery. Returns `Consumed` if
    /// any listener consumed the event; the host should then suppress the
    /// event's default behavior.
    pub fn dispatch(&self, event: &KeyEvent) -> EventResult {
        let snapshot: Vec<Listener> = match self.listeners.read() {
            Ok(table) => table.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect(),
        };

        let mut result = EventResult::Ignored;
        for listener in snapshot {
            if listener(event).is_handled() {
                result = EventResult::Consumed;
            }
        }
        result
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .map(|table| table.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    /// Check whether two handles refer to the same surface.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl fmt::Debug for InputSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped handle for an attached listener.
///
/// Detaches the listener on drop, so attachment is released on every exit
/// path of the owning component.
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<ListenerTable>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        if let Ok(mut table) = listeners.write() {
            table.retain(|(id, _)| *id != self.id);
        }
        trace!("surface: listener {:?} detached", self.id);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
