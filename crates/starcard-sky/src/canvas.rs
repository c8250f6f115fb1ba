//! The 2D drawing surface the sky is painted on.

use starcard_core::Rgba;

/// A position in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Transient paint settings applied to subsequent shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintState {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub line_width: f32,
    pub global_alpha: f32,
    pub shadow_color: Rgba,
    pub shadow_blur: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Rgba::opaque(0, 0, 0),
            stroke: Rgba::opaque(0, 0, 0),
            line_width: 1.0,
            global_alpha: 1.0,
            shadow_color: Rgba::TRANSPARENT,
            shadow_blur: 0.0,
        }
    }
}

/// A raster surface sized in device pixels with a 2D paint context.
///
/// Shapes are painted with whatever [`PaintState`] was last set, the way a
/// browser canvas context works.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Change the surface size. Resizing always clears the surface.
    fn resize(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn set_fill_color(&mut self, color: Rgba);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
    /// Opacity multiplier in `[0, 1]` for everything painted afterwards.
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_shadow_color(&mut self, color: Rgba);
    /// Glow radius in device pixels. Zero disables the glow.
    fn set_shadow_blur(&mut self, blur: f32);

    fn fill_circle(&mut self, center: Point, radius: f32);
    fn stroke_line(&mut self, from: Point, to: Point);

    /// Whether there is anything to paint on.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        self.clear_rect(0.0, 0.0, w, h);
    }
}
