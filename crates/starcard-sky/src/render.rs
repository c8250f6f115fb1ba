//! Paints one frame of the sky.

use starcard_core::ColorScheme;

use crate::canvas::{Canvas, Point};
use crate::field::ParticleField;

/// Milliseconds of animation time that pass per frame at the default cadence.
pub const FRAME_MS: u64 = 16;

/// Glow radius of a star, as a multiple of its radius.
const STAR_GLOW_SCALE: f32 = 6.0;

/// Offset of the streak tail behind the meteor head, per unit of pixel ratio.
const TRAIL_DX: f32 = 30.0;
const TRAIL_DY: f32 = 16.0;

const TRAIL_WIDTH: f32 = 1.2;
const HEAD_RADIUS: f32 = 1.6;
const HEAD_ALPHA: f32 = 0.35;
const HEAD_GLOW: f32 = 12.0;

/// Clear `canvas` and paint every star and meteor of `field` in `scheme`
/// colours as seen at `elapsed_ms`.
///
/// Meteors are painted as they are; spawning and advancing happen before
/// this is called. A zero-sized canvas is left untouched. Global alpha and
/// shadow blur are reset before returning.
pub fn render_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    field: &ParticleField,
    scheme: &ColorScheme,
    elapsed_ms: u64,
) {
    if canvas.is_empty() {
        return;
    }

    let dpr = field.pixel_ratio();
    canvas.clear();

    canvas.set_fill_color(scheme.star);
    canvas.set_shadow_color(scheme.glow);
    for star in field.stars() {
        canvas.set_global_alpha(star.alpha(elapsed_ms));
        canvas.set_shadow_blur(STAR_GLOW_SCALE * star.radius);
        canvas.fill_circle(Point::new(star.x, star.y), star.radius);
    }
    canvas.set_shadow_blur(0.0);
    canvas.set_global_alpha(1.0);

    for meteor in field.meteors() {
        let head = Point::new(meteor.x, meteor.y);

        canvas.set_stroke_color(scheme.meteor);
        canvas.set_line_width(TRAIL_WIDTH * dpr);
        canvas.set_global_alpha(meteor.fade_alpha());
        canvas.stroke_line(
            Point::new(meteor.x - TRAIL_DX * dpr, meteor.y - TRAIL_DY * dpr),
            head,
        );

        canvas.set_global_alpha(HEAD_ALPHA);
        canvas.set_shadow_color(scheme.meteor);
        canvas.set_shadow_blur(HEAD_GLOW * dpr);
        canvas.set_fill_color(scheme.meteor);
        canvas.fill_circle(head, HEAD_RADIUS * dpr);

        canvas.set_shadow_blur(0.0);
        canvas.set_global_alpha(1.0);
    }
}
