//! Keyboard shortcut matching and dispatch.
//!
//! A [`ShortcutDispatcher`] holds an ordered table of [`Shortcut`]s and a
//! live subscription to at most one surface. Matching is modifier-exact: a
//! press with extra modifiers held does not match, so `ctrl+shift+a` never
//! fires a shortcut declared for `ctrl+a`.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::events::{EventResult, Key, KeyEvent};
use crate::platform::Platform;
use crate::surface::{InputSurface, Subscription};

/// Expected modifier combination for a shortcut. Everything defaults to
/// "not held".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutModifiers {
    /// The platform primary modifier: ctrl on ctrl-primary hosts, meta on
    /// meta-primary hosts. The other key of the pair must still be released
    /// for an exact match.
    pub cmd_or_ctrl: bool,
    /// Shift expected held
    pub shift: bool,
    /// Ctrl expected held
    pub ctrl: bool,
    /// Alt expected held
    pub alt: bool,
    /// Meta expected held
    pub meta: bool,
}

impl ShortcutModifiers {
    /// No modifiers expected.
    pub const NONE: Self = Self {
        cmd_or_ctrl: false,
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Expect the platform primary modifier.
    pub const fn cmd_or_ctrl(mut self) -> Self {
        self.cmd_or_ctrl = true;
        self
    }

    /// Expect shift held.
    pub const fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Expect ctrl held.
    pub const fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Expect alt held.
    pub const fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Expect meta held.
    pub const fn meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

type ShortcutHandler = Arc<dyn Fn() + Send + Sync>;

/// A declared keyboard shortcut: key, exact modifier combination, handler.
#[derive(Clone)]
pub struct Shortcut {
    /// Key to match
    pub key: Key,
    /// Exact modifier combination to match
    pub modifiers: ShortcutModifiers,
    handler: ShortcutHandler,
}

impl Shortcut {
    /// Create a shortcut.
    pub fn new(
        key: Key,
        modifiers: ShortcutModifiers,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            modifiers,
            handler: Arc::new(handler),
        }
    }

    /// Check whether a key-down event satisfies this shortcut exactly on the
    /// given platform.
    ///
    /// `cmd_or_ctrl` folds into a concrete ctrl/meta expectation first: the
    /// primary key must be held and the other one must not be, unless the
    /// shortcut also asks for it explicitly.
    pub fn matches(&self, event: &KeyEvent, platform: Platform) -> bool {
        if event.key != self.key {
            return false;
        }
        let want = self.modifiers;
        let (want_ctrl, want_meta) = if want.cmd_or_ctrl {
            if platform.primary_is_meta() {
                (want.ctrl, true)
            } else {
                (true, want.meta)
            }
        } else {
            (want.ctrl, want.meta)
        };
        let held = event.modifiers;
        held.shift == want.shift
            && held.alt == want.alt
            && held.ctrl == want_ctrl
            && held.meta == want_meta
    }

    fn invoke(&self) {
        (self.handler)();
    }
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("key", &self.key)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

/// Dispatches keyboard events against a shortcut table.
///
/// At most one listener is live at a time: [`attach`](Self::attach) drops the
/// previous subscription before installing the new one. Dispatch is
/// single-threaded and cooperative, so the swap is atomic with respect to
/// event delivery.
#[derive(Debug)]
pub struct ShortcutDispatcher {
    shortcuts: Arc<Vec<Shortcut>>,
    platform: Platform,
    surface: Option<InputSurface>,
    subscription: Option<Subscription>,
}

impl ShortcutDispatcher {
    /// Create an unattached dispatcher.
    pub fn new(shortcuts: Vec<Shortcut>, platform: Platform) -> Self {
        Self {
            shortcuts: Arc::new(shortcuts),
            platform,
            surface: None,
            subscription: None,
        }
    }

    /// Attach to a surface, replacing any previous attachment.
    ///
    /// `None` detaches and disables dispatch; a controller with an
    /// unresolved or disabled keyboard target passes `None` here.
    pub fn attach(&mut self, surface: Option<&InputSurface>) {
        self.subscription = None;
        self.surface = None;
        let Some(surface) = surface else {
            debug!("shortcut dispatch disabled: no keyboard target");
            return;
        };
        let shortcuts = Arc::clone(&self.shortcuts);
        let platform = self.platform;
        self.subscription =
            Some(surface.subscribe(move |event| dispatch(&shortcuts, platform, event)));
        self.surface = Some(surface.clone());
    }

    /// Check whether a listener is currently live.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// The surface the live listener is attached to, if any.
    pub fn surface(&self) -> Option<&InputSurface> {
        self.surface.as_ref()
    }
}

/// Fire every matching shortcut for a key-down event.
///
/// All matches fire, in table order; there is no short-circuit on the first
/// one. Returns `Consumed` exactly once when at least one shortcut matched,
/// which tells the host to suppress the event's default behavior.
fn dispatch(shortcuts: &[Shortcut], platform: Platform, event: &KeyEvent) -> EventResult {
    if !event.is_down() {
        return EventResult::Ignored;
    }
    let mut matched = false;
    for shortcut in shortcuts {
        if shortcut.matches(event, platform) {
            trace!("shortcut matched: {:?}", shortcut);
            matched = true;
            shortcut.invoke();
        }
    }
    if matched {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}
