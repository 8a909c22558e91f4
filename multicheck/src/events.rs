//! Input event types shared across the crate.
//!
//! The host owns the real input loop. It translates whatever events it
//! receives (DOM, terminal, test fixtures) into [`KeyEvent`]s and feeds them
//! to an [`InputSurface`](crate::surface::InputSurface).

/// Modifier keys state observed on an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key held
    pub shift: bool,
    /// Control key held
    pub ctrl: bool,
    /// Alt key held
    pub alt: bool,
    /// Meta (Cmd/Win) key held
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Add meta modifier
    pub const fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Shift (as the pressed key itself)
    Shift,
    /// Control (as the pressed key itself)
    Ctrl,
    /// Alt (as the pressed key itself)
    Alt,
    /// Meta (as the pressed key itself)
    Meta,
}

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// Key pressed
    Down,
    /// Key released
    Up,
}

/// A keyboard event delivered through an input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Press or release
    pub kind: KeyEventKind,
    /// The key itself
    pub key: Key,
    /// Modifier keys held at the time of the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key-down event
    pub const fn down(key: Key, modifiers: Modifiers) -> Self {
        Self {
            kind: KeyEventKind::Down,
            key,
            modifiers,
        }
    }

    /// Create a key-up event
    pub const fn up(key: Key, modifiers: Modifiers) -> Self {
        Self {
            kind: KeyEventKind::Up,
            key,
            modifiers,
        }
    }

    /// Check if this is a key-down event
    pub fn is_down(&self) -> bool {
        self.kind == KeyEventKind::Down
    }
}

/// Result of a listener observing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, other listeners still run.
    Ignored,
    /// Event was consumed; the host should suppress its default behavior.
    Consumed,
}

impl EventResult {
    /// Check if the event was consumed.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
