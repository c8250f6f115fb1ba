//! Dark/light theme and the colour schemes derived from it.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::Rgba;

/// Storage key under which the theme preference is persisted.
pub const THEME_KEY: &str = "pref-theme";

/// Colour theme for the card and its sky.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value written to preference storage.
    pub fn as_pref(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored preference. Only `"dark"` selects the dark theme;
    /// anything else falls back to light.
    pub fn from_pref(value: &str) -> Self {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }

    /// Colours used to paint the sky.
    pub fn scheme(self) -> ColorScheme {
        ColorScheme::for_dark(self.is_dark())
    }

    /// Opaque page colour the transparent sky is composited over.
    pub fn backdrop(self) -> Rgba {
        match self {
            Theme::Dark => Rgba::opaque(11, 13, 23),
            Theme::Light => Rgba::opaque(246, 245, 240),
        }
    }

    /// Foreground colour for card text.
    pub fn text(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(230, 232, 240),
            Theme::Light => Color::Rgb(30, 30, 36),
        }
    }

    /// Accent colour for the avatar and key hints.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(160, 190, 255),
            Theme::Light => Color::Rgb(60, 80, 160),
        }
    }

    /// Muted colour for secondary text.
    pub fn muted(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(120, 125, 145),
            Theme::Light => Color::Rgb(120, 120, 128),
        }
    }
}

/// The four colours the sky renderer paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Sky fill. Transparent so the page backdrop shows through.
    pub sky: Rgba,
    pub star: Rgba,
    pub glow: Rgba,
    pub meteor: Rgba,
}

impl ColorScheme {
    pub const DARK: ColorScheme = ColorScheme {
        sky: Rgba::TRANSPARENT,
        star: Rgba::new(255, 255, 255, 0.8),
        glow: Rgba::new(255, 255, 255, 0.35),
        meteor: Rgba::new(200, 220, 255, 0.9),
    };

    pub const LIGHT: ColorScheme = ColorScheme {
        sky: Rgba::TRANSPARENT,
        star: Rgba::new(0, 0, 0, 0.7),
        glow: Rgba::new(0, 0, 0, 0.25),
        meteor: Rgba::new(60, 60, 60, 0.9),
    };

    pub fn for_dark(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }
}
