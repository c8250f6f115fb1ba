//! The active theme, persisted in preference storage.

use starcard_config::Storage;
use starcard_core::{THEME_KEY, Theme};

/// Holds the active theme and writes every change back to storage.
pub struct ThemeProvider {
    storage: Box<dyn Storage>,
    theme: Theme,
}

impl ThemeProvider {
    /// Restore the stored theme, or apply `fallback` when none is stored.
    pub fn load(storage: Box<dyn Storage>, fallback: Theme) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .map(|saved| Theme::from_pref(&saved))
            .unwrap_or(fallback);
        let mut provider = Self { storage, theme };
        provider.apply(theme);
        provider
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Switch between dark and light and persist the choice.
    pub fn toggle(&mut self) -> Theme {
        self.apply(self.theme.toggle());
        self.theme
    }

    fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_pref()) {
            tracing::warn!(error = %e, "could not persist theme");
        }
    }
}
