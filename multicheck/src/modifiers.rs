//! Held-modifier tracking.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::events::{EventResult, Modifiers};
use crate::surface::{InputSurface, Subscription};

/// Tracks the modifier state last observed on an input surface.
///
/// Each tracker owns its own subscription, so independent controllers never
/// share or race on modifier state. The tracker observes both key-down and
/// key-up events and records the modifier flags of the most recent one; it
/// never consumes events.
///
/// Caveat: if the host stops delivering key events while a modifier is
/// physically held (focus loss, window switch), the recorded state stays
/// "held" until the next observed event.
pub struct ModifierTracker {
    state: Arc<RwLock<Modifiers>>,
    _subscription: Subscription,
}

impl ModifierTracker {
    /// Attach a tracker to a surface.
    pub fn attach(surface: &InputSurface) -> Self {
        let state = Arc::new(RwLock::new(Modifiers::NONE));
        let shared = Arc::clone(&state);
        let subscription = surface.subscribe(move |event| {
            if let Ok(mut guard) = shared.write() {
                *guard = event.modifiers;
            }
            EventResult::Ignored
        });
        Self {
            state,
            _subscription: subscription,
        }
    }

    /// The modifier flags of the last observed key event.
    pub fn modifiers(&self) -> Modifiers {
        self.state
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    /// Check whether shift was held on the last observed key event.
    pub fn shift_held(&self) -> bool {
        self.modifiers().shift
    }
}

impl fmt::Debug for ModifierTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierTracker")
            .field("modifiers", &self.modifiers())
            .finish()
    }
}
