//! Host platform capability.
//!
//! Keyboard conventions differ on one axis this crate cares about: whether
//! the primary shortcut modifier is meta (Cmd) or ctrl. The value is injected
//! at construction so the matching logic stays pure; [`Platform::host`] is a
//! convenience for embedders that just want the compiled-for default.

/// Which key acts as the primary shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Ctrl is the primary modifier (Linux, Windows, BSDs).
    CtrlPrimary,
    /// Meta (Cmd) is the primary modifier (Apple-style hosts).
    MetaPrimary,
}

impl Platform {
    /// The convention of the platform this binary was compiled for.
    pub const fn host() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::MetaPrimary
        } else {
            Self::CtrlPrimary
        }
    }

    /// Check whether the primary modifier resolves to meta.
    pub const fn primary_is_meta(self) -> bool {
        matches!(self, Self::MetaPrimary)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}
