//! Keyboard target resolution.
//!
//! A controller declares *where* it wants to listen with a
//! [`KeyboardTarget`]; a [`SurfaceRegistry`] maps that declaration to a
//! concrete [`InputSurface`], or to nothing. Selector resolution happens once
//! at attach time, and an unresolved selector silently disables keyboard
//! handling for that controller.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::surface::InputSurface;

/// Where a controller listens for keyboard input.
#[derive(Debug, Clone, Default)]
pub enum KeyboardTarget {
    /// The window-level surface shared by the whole host.
    #[default]
    Window,
    /// A concrete surface handle.
    Surface(InputSurface),
    /// A named surface, resolved once at attach time.
    Selector(String),
    /// Keyboard handling disabled.
    Disabled,
}

/// Error type for surface registration failures.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// A surface is already registered under this selector.
    #[error("selector already registered: {0}")]
    DuplicateSelector(String),
}

/// Maps keyboard targets to concrete surfaces.
///
/// The registry owns the window surface and any named surfaces the host
/// exposes. Cloning a registry shares its surfaces.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    window: InputSurface,
    named: HashMap<String, InputSurface>,
}

impl SurfaceRegistry {
    /// Create a registry with a fresh window surface and no named surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// The window-level surface.
    pub fn window(&self) -> &InputSurface {
        &self.window
    }

    /// Register a surface under a selector.
    pub fn register(
        &mut self,
        selector: impl Into<String>,
        surface: InputSurface,
    ) -> Result<(), RegistryError> {
        let selector = selector.into();
        if self.named.contains_key(&selector) {
            return Err(RegistryError::DuplicateSelector(selector));
        }
        self.named.insert(selector, surface);
        Ok(())
    }

    /// Resolve a target to a listenable surface.
    ///
    /// `None` means keyboard handling is disabled for the caller: either the
    /// target is [`KeyboardTarget::Disabled`] or a selector did not resolve.
    pub fn resolve(&self, target: &KeyboardTarget) -> Option<InputSurface> {
        match target {
            KeyboardTarget::Window => Some(self.window.clone()),
            KeyboardTarget::Surface(surface) => Some(surface.clone()),
            KeyboardTarget::Selector(selector) => {
                let found = self.named.get(selector).cloned();
                if found.is_none() {
                    debug!("keyboard target not found: {}", selector);
                }
                found
            }
            KeyboardTarget::Disabled => None,
        }
    }
}
