//! Batch-selection controller for ordered checkable lists.
//!
//! Decouples "which items are selected" and "how selection changes in
//! response to input" from rendering: single-item toggling, shift-click
//! contiguous range extension anchored to the last touched item, and
//! keyboard-shortcut dispatch with modifier-exact, platform-aware matching.
//!
//! The host owns the real input loop; it feeds
//! [`KeyEvent`](events::KeyEvent)s into [`InputSurface`](surface::InputSurface)s
//! and wires [`CheckboxProps`](controller::CheckboxProps) into its rows. All
//! state transitions run synchronously inside those callbacks; the crate is
//! single-threaded and cooperative by design.

pub mod controller;
pub mod events;
pub mod modifiers;
pub mod platform;
pub mod selection;
pub mod shortcuts;
pub mod surface;
pub mod target;

pub mod prelude {
    pub use crate::controller::{
        ChangeHandler, CheckItem, CheckboxProps, MultiCheck, MultiCheckOptions,
    };
    pub use crate::events::{EventResult, Key, KeyEvent, KeyEventKind, Modifiers};
    pub use crate::modifiers::ModifierTracker;
    pub use crate::platform::Platform;
    pub use crate::selection::{SelectionAction, SelectionState, resolve_range};
    pub use crate::shortcuts::{Shortcut, ShortcutDispatcher, ShortcutModifiers};
    pub use crate::surface::{InputSurface, Subscription};
    pub use crate::target::{KeyboardTarget, RegistryError, SurfaceRegistry};
}
