//! The multi-checkbox controller facade.
//!
//! [`MultiCheck`] composes the selection reducer, the modifier tracker, and
//! the shortcut dispatcher behind one surface: derived flags for rendering,
//! per-item checkbox bindings, and imperative check-all/clear commands.
//!
//! All mutation happens synchronously inside host event callbacks; the
//! controller folds every transition over the currently committed state, so
//! transitions queued within one tick (key repeat, click followed by a
//! shortcut) compose instead of clobbering each other.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::events::Key;
use crate::modifiers::ModifierTracker;
use crate::platform::Platform;
use crate::selection::{SelectionAction, SelectionState};
use crate::shortcuts::{Shortcut, ShortcutDispatcher, ShortcutModifiers};
use crate::target::{KeyboardTarget, SurfaceRegistry};

/// Extracts the stable string id from a caller item type.
///
/// The controller consumes only ids; every other field of an item is the
/// renderer's business.
pub trait CheckItem {
    /// Unique id of this item.
    fn check_id(&self) -> String;
}

impl CheckItem for String {
    fn check_id(&self) -> String {
        self.clone()
    }
}

impl CheckItem for &str {
    fn check_id(&self) -> String {
        (*self).to_string()
    }
}

/// Construction options for [`MultiCheck`].
#[derive(Debug, Clone, Default)]
pub struct MultiCheckOptions {
    /// Where keyboard shortcuts listen. Defaults to the window surface.
    pub keyboard_target: KeyboardTarget,
    /// Primary-modifier convention. Defaults to the compiled-for host.
    pub platform: Platform,
}

#[derive(Debug)]
struct MultiCheckInner {
    /// Current item ids, in list order.
    order: Vec<String>,
    /// Checked set and range anchor.
    selection: SelectionState,
    /// Shortcut table and its live attachment.
    dispatcher: ShortcutDispatcher,
}

/// Batch-selection controller for an ordered checkable list.
///
/// Cheap to clone; clones share state. Shift-click range semantics come from
/// the modifier tracker, which observes the window surface, while shortcuts
/// listen on the configured keyboard target.
///
/// Dropping the last handle releases both listeners.
#[derive(Debug, Clone)]
pub struct MultiCheck {
    inner: Arc<RwLock<MultiCheckInner>>,
    tracker: Arc<ModifierTracker>,
    registry: SurfaceRegistry,
    platform: Platform,
    dirty: Arc<AtomicBool>,
}

impl MultiCheck {
    /// Create a controller over `items` and attach its keyboard handling.
    pub fn new<T: CheckItem>(
        items: &[T],
        options: MultiCheckOptions,
        registry: &SurfaceRegistry,
    ) -> Self {
        let order: Vec<String> = items.iter().map(CheckItem::check_id).collect();
        let controller = Self {
            inner: Arc::new(RwLock::new(MultiCheckInner {
                order,
                selection: SelectionState::new(),
                dispatcher: ShortcutDispatcher::new(Vec::new(), options.platform),
            })),
            tracker: Arc::new(ModifierTracker::attach(registry.window())),
            registry: registry.clone(),
            platform: options.platform,
            dirty: Arc::new(AtomicBool::new(false)),
        };

        let mut dispatcher =
            ShortcutDispatcher::new(controller.default_shortcuts(), options.platform);
        dispatcher.attach(
            controller
                .registry
                .resolve(&options.keyboard_target)
                .as_ref(),
        );
        write_guard(&controller.inner).dispatcher = dispatcher;
        controller
    }

    /// Check every item. Anchor is unchanged.
    pub fn check_all(&self) {
        self.apply(SelectionAction::CheckAll);
    }

    /// Uncheck everything. Anchor is deliberately unchanged, so a later
    /// shift-click still ranges from the last touched item.
    pub fn clear(&self) {
        self.apply(SelectionAction::Clear);
    }

    /// Apply a checkbox change for one item, honoring a held shift key.
    ///
    /// With shift held and an anchor present this toggles the whole range
    /// between the anchor and `id`; otherwise just `id`. Either way `id`
    /// becomes the new anchor, so consecutive shift-clicks chain.
    pub fn set_checked(&self, id: &str, checked: bool) {
        let id = id.to_string();
        let action = if self.tracker.shift_held() {
            SelectionAction::ToggleRange { id, checked }
        } else {
            SelectionAction::ToggleSingle { id, checked }
        };
        self.apply(action);
    }

    /// Per-item render binding.
    pub fn checkbox_props(&self, id: &str) -> CheckboxProps {
        CheckboxProps {
            checked: self.is_checked(id),
            on_change: ChangeHandler {
                controller: self.clone(),
                id: id.to_string(),
            },
        }
    }

    /// Check if an id is currently checked.
    pub fn is_checked(&self, id: &str) -> bool {
        read_guard(&self.inner).selection.is_checked(id)
    }

    /// Currently checked ids, in the order they were first checked.
    pub fn checked_items(&self) -> Vec<String> {
        read_guard(&self.inner).selection.checked_items()
    }

    /// Check if at least one item is checked.
    pub fn any_checked(&self) -> bool {
        read_guard(&self.inner).selection.any_checked()
    }

    /// Check if every item is checked. Vacuously true for an empty list.
    pub fn all_checked(&self) -> bool {
        let inner = read_guard(&self.inner);
        inner.selection.all_checked(inner.order.len())
    }

    /// Replace the item list.
    ///
    /// Checked ids no longer present are pruned, so the checked set stays a
    /// subset of the current items.
    pub fn set_items<T: CheckItem>(&self, items: &[T]) {
        let order: Vec<String> = items.iter().map(CheckItem::check_id).collect();
        let mut inner = write_guard(&self.inner);
        inner.selection.retain(&order);
        inner.order = order;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Re-resolve the keyboard target and swap the shortcut attachment.
    ///
    /// When the new target resolves to the surface already attached, the
    /// live listener is kept as-is so no event is missed or duplicated.
    pub fn set_keyboard_target(&self, target: &KeyboardTarget) {
        let resolved = self.registry.resolve(target);
        let mut inner = write_guard(&self.inner);
        match (&resolved, inner.dispatcher.surface()) {
            (Some(new), Some(old)) if new.ptr_eq(old) => return,
            (None, None) => return,
            _ => {}
        }
        inner.dispatcher.attach(resolved.as_ref());
    }

    /// Check if the controller state changed since the last
    /// [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after a render pass.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn apply(&self, action: SelectionAction) {
        apply_action(&self.inner, &self.dirty, action);
    }

    /// The default shortcut table: primary-modifier + `a` checks everything,
    /// Escape clears. Clearing an empty set is a no-op, so Escape fires
    /// unconditionally.
    ///
    /// Handlers hold only a weak reference to the controller state, so a
    /// still-attached surface never keeps a dropped controller alive.
    fn default_shortcuts(&self) -> Vec<Shortcut> {
        let check_all = {
            let inner = Arc::downgrade(&self.inner);
            let dirty = Arc::clone(&self.dirty);
            move || {
                if let Some(inner) = inner.upgrade() {
                    apply_action(&inner, &dirty, SelectionAction::CheckAll);
                }
            }
        };
        let clear = {
            let inner = Arc::downgrade(&self.inner);
            let dirty = Arc::clone(&self.dirty);
            move || {
                if let Some(inner) = inner.upgrade() {
                    apply_action(&inner, &dirty, SelectionAction::Clear);
                }
            }
        };
        vec![
            Shortcut::new(
                Key::Char('a'),
                ShortcutModifiers::NONE.cmd_or_ctrl(),
                check_all,
            ),
            Shortcut::new(Key::Escape, ShortcutModifiers::NONE, clear),
        ]
    }
}

/// Per-item render binding: the checked flag for this render pass plus the
/// change callback to wire into the host checkbox.
#[derive(Debug, Clone)]
pub struct CheckboxProps {
    /// Whether this item's checkbox renders checked.
    pub checked: bool,
    /// Change callback bound to this item.
    pub on_change: ChangeHandler,
}

/// Change callback bound to one item id.
///
/// Reads the held-shift state at the moment [`emit`](Self::emit) is called,
/// not at binding time, so a binding created before shift was pressed still
/// produces a range toggle.
#[derive(Debug, Clone)]
pub struct ChangeHandler {
    controller: MultiCheck,
    id: String,
}

impl ChangeHandler {
    /// Apply the host checkbox's new state.
    pub fn emit(&self, checked: bool) {
        self.controller.set_checked(&self.id, checked);
    }
}

fn apply_action(inner: &RwLock<MultiCheckInner>, dirty: &AtomicBool, action: SelectionAction) {
    let mut guard = match inner.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let MultiCheckInner {
        order, selection, ..
    } = &mut *guard;
    selection.apply(order, action);
    dirty.store(true, Ordering::SeqCst);
}

fn read_guard(inner: &RwLock<MultiCheckInner>) -> std::sync::RwLockReadGuard<'_, MultiCheckInner> {
    match inner.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_guard(
    inner: &RwLock<MultiCheckInner>,
) -> std::sync::RwLockWriteGuard<'_, MultiCheckInner> {
    match inner.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
