//! Glyphs the cell canvas draws shapes with.

/// Star glyphs from smallest to largest apparent radius.
pub const STAR_CHARS: &[char] = &['·', '∙', '+', '*', '✦'];

/// Largest radius, as a fraction of the cell width, mapped onto `STAR_CHARS`.
pub const STAR_MAX_RADIUS_CELLS: f32 = 0.2;

/// Stroke glyphs for mostly horizontal, mostly vertical, falling and
/// rising lines.
pub const STROKE_HORIZONTAL: char = '─';
pub const STROKE_VERTICAL: char = '│';
pub const STROKE_FALLING: char = '╲';
pub const STROKE_RISING: char = '╱';

/// Pick a star glyph for a circle `radius_cells` cell widths across.
pub fn star_char(radius_cells: f32) -> char {
    let t = (radius_cells / STAR_MAX_RADIUS_CELLS).clamp(0.0, 1.0);
    let idx = ((t * STAR_CHARS.len() as f32) as usize).min(STAR_CHARS.len() - 1);
    STAR_CHARS[idx]
}

/// Pick a stroke glyph for a line with the given extent in cells.
pub fn stroke_char(dx_cells: f32, dy_cells: f32) -> char {
    let (ax, ay) = (dx_cells.abs(), dy_cells.abs());
    if ay <= ax * 0.25 {
        STROKE_HORIZONTAL
    } else if ax <= ay * 0.25 {
        STROKE_VERTICAL
    } else if (dx_cells > 0.0) == (dy_cells > 0.0) {
        STROKE_FALLING
    } else {
        STROKE_RISING
    }
}
