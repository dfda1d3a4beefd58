// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Light/dark theme toggle.
//!
//! Two states, one transition. The stored value is read once at load; each click
//! flips the theme, repaints the root attribute and the toggle button, and writes
//! the new value back under the same key. No cross-tab sync.

use crate::error::StorageError;
use crate::types::ThemePreference;
use std::cell::Cell;

/// Browser-local key/value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The parts of the page that reflect the theme.
pub trait ThemeSurface {
    /// Set the theme attribute on the root element.
    fn set_root_theme(&self, theme: &str);
    fn set_icon(&self, icon: &str);
    fn set_label(&self, label: &str);
}

/// Owns the current theme and keeps page and storage in step with it.
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    key: String,
    fallback: ThemePreference,
    current: Cell<ThemePreference>,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T, key: impl Into<String>, fallback: ThemePreference) -> Self {
        Self {
            store,
            surface,
            key: key.into(),
            fallback,
            current: Cell::new(fallback),
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    /// Read the stored preference and paint it. Does not write storage.
    ///
    /// A missing key or a value other than `light`/`dark` falls back to the
    /// default.
    pub fn init(&self) -> ThemePreference {
        let theme = match self.store.load(&self.key) {
            Some(stored) => stored.parse().unwrap_or_else(|err| {
                tracing::debug!(error = %err, "ignoring stored theme");
                self.fallback
            }),
            None => self.fallback,
        };
        self.apply(theme);
        theme
    }

    /// Flip, paint and persist. Returns the new theme.
    ///
    /// A failed write is logged; the page still switches.
    pub fn toggle(&self) -> ThemePreference {
        let theme = self.current.get().toggled();
        self.apply(theme);
        if let Err(err) = self.store.save(&self.key, theme.as_str()) {
            tracing::warn!(error = %err, "theme preference not persisted");
        }
        theme
    }

    fn apply(&self, theme: ThemePreference) {
        self.current.set(theme);
        self.surface.set_root_theme(theme.as_str());
        self.surface.set_icon(theme.icon());
        self.surface.set_label(theme.label());
    }
}
