//! RGBA colours and compositing onto an opaque backdrop.

use ratatui::style::Color;

/// A straight (non-premultiplied) RGBA colour. Alpha is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Composite this colour over an opaque `backdrop`, scaling its own
    /// alpha by `alpha` (a global paint alpha). The result is opaque.
    pub fn over(self, backdrop: Rgba, alpha: f32) -> Rgba {
        let a = (self.a * alpha).clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * a).round() as u8;
        Rgba::opaque(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }

    /// Convert to a terminal colour, ignoring alpha.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_full_alpha_keeps_colour() {
        let c = Rgba::new(200, 100, 50, 1.0);
        assert_eq!(c.over(Rgba::opaque(0, 0, 0), 1.0), Rgba::opaque(200, 100, 50));
    }

    #[test]
    fn test_over_zero_alpha_is_backdrop() {
        let c = Rgba::new(200, 100, 50, 0.8);
        let bg = Rgba::opaque(10, 20, 30);
        assert_eq!(c.over(bg, 0.0), bg);
    }

    #[test]
    fn test_over_half_alpha() {
        let white = Rgba::new(255, 255, 255, 0.5);
        assert_eq!(white.over(Rgba::opaque(0, 0, 0), 1.0), Rgba::opaque(128, 128, 128));
    }
}
