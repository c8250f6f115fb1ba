//! Core types shared across the starcard crates.

mod color;
mod profile;
mod theme;

pub use color::Rgba;
pub use profile::initials_from_name;
pub use theme::{ColorScheme, THEME_KEY, Theme};
