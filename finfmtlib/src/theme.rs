//! Explicit display-theme context.
//!
//! Theme state is an injectable context object with an
//! init/read/write/teardown lifecycle, backed by a caller-supplied
//! store. Nothing in the formatting or rendering layers reads it;
//! consumers that want themed output are handed a [`ThemeMode`]
//! explicitly.

use serde::{Deserialize, Serialize};

/// The two-state display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Persistence seam for the theme mode.
///
/// `load` returning `None` means no stored preference; the context
/// falls back to the default mode.
pub trait ThemeStore {
    fn load(&self) -> Option<ThemeMode>;
    fn save(&mut self, mode: ThemeMode);
}

/// In-process store, useful for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    stored: Option<ThemeMode>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a preference
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self { stored: Some(mode) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.stored
    }

    fn save(&mut self, mode: ThemeMode) {
        self.stored = Some(mode);
    }
}

/// Live theme state with an explicit lifecycle.
pub struct ThemeContext {
    mode: ThemeMode,
    store: Box<dyn ThemeStore>,
}

impl ThemeContext {
    /// Initialize from a store, defaulting to [`ThemeMode::Light`]
    /// when the store holds no preference.
    pub fn init(store: Box<dyn ThemeStore>) -> Self {
        let mode = store.load().unwrap_or_default();
        Self { mode, store }
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Set the mode without persisting
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Flip between light and dark, returning the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Persist the current mode and consume the context.
    pub fn teardown(mut self) {
        self.store.save(self.mode);
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
