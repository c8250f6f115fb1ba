//! A drawing surface backed by a grid of terminal cells.
//!
//! Shapes are rasterized coarsely: a circle becomes a star glyph in the
//! cell holding its center, a line becomes a run of stroke glyphs, and a
//! shadow blur tints the background of the cells around the shape.
//! Terminals have no alpha channel, so every colour is composited over an
//! opaque backdrop as it is painted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use starcard_core::Rgba;

use crate::canvas::{Canvas, PaintState, Point};
use crate::chars::{star_char, stroke_char};

/// Share of the shadow colour that reaches the shape's own cell.
const GLOW_STRENGTH: f32 = 0.5;

/// Furthest a glow reaches, in cells.
const GLOW_MAX_REACH_X: f32 = 2.0;
const GLOW_MAX_REACH_Y: f32 = 1.0;

/// One painted terminal cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkyCell {
    pub symbol: Option<char>,
    /// Opaque glyph colour.
    pub fg: Option<Rgba>,
    /// Opaque background tint left by glows.
    pub tint: Option<Rgba>,
}

/// A [`Canvas`] whose pixels are terminal cells of a fixed size.
///
/// The image is retained between frames, so rendering the canvas as a
/// widget shows the last painted frame even when the animation is stopped.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    width: u32,
    height: u32,
    /// Device pixels per cell.
    cell_width: f32,
    cell_height: f32,
    cols: u16,
    rows: u16,
    backdrop: Rgba,
    state: PaintState,
    cells: Vec<SkyCell>,
}

impl CellCanvas {
    /// Create an empty canvas whose cells span `cell_width` x `cell_height`
    /// device pixels.
    pub fn new(cell_width: f32, cell_height: f32, backdrop: Rgba) -> Self {
        Self {
            width: 0,
            height: 0,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
            cols: 0,
            rows: 0,
            backdrop,
            state: PaintState::default(),
            cells: Vec::new(),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn backdrop(&self) -> Rgba {
        self.backdrop
    }

    /// Surface size in device pixels covering `cols` x `rows` cells.
    pub fn surface_size(&self, cols: u16, rows: u16) -> (u32, u32) {
        (
            (cols as f32 * self.cell_width).round() as u32,
            (rows as f32 * self.cell_height).round() as u32,
        )
    }

    /// Switch the colour the sky is composited over. The painted image was
    /// composited over the old backdrop, so it is discarded.
    pub fn set_backdrop(&mut self, backdrop: Rgba) {
        if backdrop != self.backdrop {
            self.backdrop = backdrop;
            self.cells.fill(SkyCell::default());
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&SkyCell> {
        if col < self.cols && row < self.rows {
            self.cells.get(self.index(col, row))
        } else {
            None
        }
    }

    /// Build the rows of styled spans for the current image.
    pub fn lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span> = (0..self.cols)
                    .map(|col| self.render_cell(&self.cells[self.index(col, row)]))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_cell(&self, cell: &SkyCell) -> Span<'static> {
        let bg = cell.tint.unwrap_or(self.backdrop).color();
        match (cell.symbol, cell.fg) {
            (Some(ch), Some(fg)) => {
                Span::styled(ch.to_string(), Style::new().fg(fg.color()).bg(bg))
            }
            _ => Span::styled(" ", Style::new().bg(bg)),
        }
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn cell_at(&self, p: Point) -> Option<(u16, u16)> {
        if !(p.x >= 0.0 && p.y >= 0.0 && p.x < self.width as f32 && p.y < self.height as f32) {
            return None;
        }
        let col = (p.x / self.cell_width) as u16;
        let row = (p.y / self.cell_height) as u16;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// Tint the cells around (`col`, `row`) with the current shadow.
    fn glow(&mut self, col: u16, row: u16) {
        let PaintState {
            shadow_color,
            shadow_blur,
            global_alpha,
            ..
        } = self.state;
        if shadow_blur <= 0.0 || shadow_color.a <= 0.0 || global_alpha <= 0.0 {
            return;
        }

        let reach_x = (shadow_blur / self.cell_width).round().min(GLOW_MAX_REACH_X) as i32;
        let reach_y = (shadow_blur / self.cell_height).round().min(GLOW_MAX_REACH_Y) as i32;
        for dy in -reach_y..=reach_y {
            for dx in -reach_x..=reach_x {
                let (c, r) = (col as i32 + dx, row as i32 + dy);
                if c < 0 || r < 0 || c >= self.cols as i32 || r >= self.rows as i32 {
                    continue;
                }
                let falloff = 1.0 / (1 + dx.abs() + dy.abs()) as f32;
                let idx = self.index(c as u16, r as u16);
                let base = self.cells[idx].tint.unwrap_or(self.backdrop);
                self.cells[idx].tint =
                    Some(shadow_color.over(base, global_alpha * GLOW_STRENGTH * falloff));
            }
        }
    }
}

impl Canvas for CellCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cols = (width as f32 / self.cell_width).ceil().min(u16::MAX as f32) as u16;
        self.rows = (height as f32 / self.cell_height).ceil().min(u16::MAX as f32) as u16;
        self.cells = vec![SkyCell::default(); self.cols as usize * self.rows as usize];
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let col0 = (x / self.cell_width).floor().max(0.0) as u16;
        let row0 = (y / self.cell_height).floor().max(0.0) as u16;
        let col1 = ((x + width) / self.cell_width).ceil().clamp(0.0, self.cols as f32) as u16;
        let row1 = ((y + height) / self.cell_height).ceil().clamp(0.0, self.rows as f32) as u16;
        for row in row0..row1 {
            for col in col0..col1 {
                let idx = self.index(col, row);
                self.cells[idx] = SkyCell::default();
            }
        }
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_shadow_color(&mut self, color: Rgba) {
        self.state.shadow_color = color;
    }

    fn set_shadow_blur(&mut self, blur: f32) {
        self.state.shadow_blur = blur.max(0.0);
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        let Some((col, row)) = self.cell_at(center) else {
            return;
        };

        self.glow(col, row);
        let idx = self.index(col, row);
        let cell = self.cells[idx];
        // Circles composite over what is already drawn, so a meteor head
        // brightens the end of its streak.
        let base = cell.fg.or(cell.tint).unwrap_or(self.backdrop);
        self.cells[idx] = SkyCell {
            symbol: Some(star_char(radius / self.cell_width)),
            fg: Some(self.state.fill.over(base, self.state.global_alpha)),
            tint: cell.tint,
        };
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let dx = (to.x - from.x) / self.cell_width;
        let dy = (to.y - from.y) / self.cell_height;
        let symbol = stroke_char(dx, dy);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;

        let mut last = None;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            let Some(pos) = self.cell_at(p) else {
                continue;
            };
            if last == Some(pos) {
                continue;
            }
            last = Some(pos);

            let idx = self.index(pos.0, pos.1);
            let base = self.cells[idx].tint.unwrap_or(self.backdrop);
            self.cells[idx].symbol = Some(symbol);
            self.cells[idx].fg = Some(self.state.stroke.over(base, self.state.global_alpha));
        }
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    fn canvas(cols: u16, rows: u16) -> CellCanvas {
        let mut c = CellCanvas::new(8.0, 16.0, BLACK);
        let (w, h) = c.surface_size(cols, rows);
        c.resize(w, h);
        c
    }

    #[test]
    fn test_resize_sizes_grid() {
        let c = canvas(10, 4);
        assert_eq!((c.width(), c.height()), (80, 64));
        assert_eq!((c.cols(), c.rows()), (10, 4));
        assert!(c.cell(9, 3).is_some());
        assert!(c.cell(10, 0).is_none());
    }

    #[test]
    fn test_partial_cells_round_up() {
        let mut c = CellCanvas::new(8.0, 16.0, BLACK);
        c.resize(81, 17);
        assert_eq!((c.cols(), c.rows()), (11, 2));
    }

    #[test]
    fn test_fill_circle_marks_center_cell() {
        let mut c = canvas(10, 4);
        c.set_fill_color(Rgba::new(255, 255, 255, 1.0));
        c.set_global_alpha(0.5);
        c.fill_circle(Point::new(20.0, 40.0), 1.6);

        let cell = c.cell(2, 2).unwrap();
        assert_eq!(cell.symbol, Some('✦'));
        assert_eq!(cell.fg, Some(Rgba::opaque(128, 128, 128)));
        assert_eq!(c.cell(1, 2).unwrap().symbol, None);
    }

    #[test]
    fn test_shapes_off_surface_are_ignored() {
        let mut c = canvas(4, 2);
        c.fill_circle(Point::new(-1.0, 5.0), 1.0);
        c.fill_circle(Point::new(32.0, 5.0), 1.0);
        c.stroke_line(Point::new(-100.0, -100.0), Point::new(-10.0, -10.0));
        assert!(c.lines().iter().all(|l| l.to_string().trim().is_empty()));
    }

    #[test]
    fn test_glow_tints_neighbours() {
        let mut c = canvas(5, 3);
        c.set_fill_color(Rgba::new(255, 255, 255, 0.8));
        c.set_shadow_color(Rgba::new(255, 255, 255, 0.35));
        c.set_shadow_blur(9.0);
        c.fill_circle(Point::new(20.0, 24.0), 1.5);

        let center = c.cell(2, 1).unwrap().tint.unwrap();
        let side = c.cell(3, 1).unwrap().tint.unwrap();
        assert!(center.r > side.r && side.r > 0);
        assert!(c.cell(0, 1).unwrap().tint.is_none());
    }

    #[test]
    fn test_no_glow_without_blur() {
        let mut c = canvas(5, 3);
        c.set_shadow_color(Rgba::new(255, 255, 255, 0.35));
        c.fill_circle(Point::new(20.0, 24.0), 1.5);
        assert!(c.cell(2, 1).unwrap().tint.is_none());
    }

    #[test]
    fn test_stroke_line_walks_cells() {
        let mut c = canvas(10, 4);
        c.set_stroke_color(Rgba::new(200, 220, 255, 0.9));
        c.stroke_line(Point::new(4.0, 8.0), Point::new(60.0, 40.0));

        let painted: Vec<(u16, u16)> = (0..4)
            .flat_map(|row| (0..10).map(move |col| (col, row)))
            .filter(|&(col, row)| c.cell(col, row).unwrap().symbol.is_some())
            .collect();
        assert_eq!(painted.first(), Some(&(0, 0)));
        assert_eq!(painted.last(), Some(&(7, 2)));
        assert!(painted.len() >= 7);
        assert_eq!(c.cell(7, 2).unwrap().symbol, Some('╲'));
    }

    #[test]
    fn test_clear_rect_resets_cells() {
        let mut c = canvas(4, 2);
        c.fill_circle(Point::new(4.0, 4.0), 1.0);
        c.fill_circle(Point::new(28.0, 20.0), 1.0);
        c.clear_rect(0.0, 0.0, 8.0, 16.0);
        assert_eq!(c.cell(0, 0), Some(&SkyCell::default()));
        assert!(c.cell(3, 1).unwrap().symbol.is_some());

        c.clear();
        assert_eq!(c.cell(3, 1), Some(&SkyCell::default()));
    }

    #[test]
    fn test_backdrop_change_discards_image() {
        let mut c = canvas(4, 2);
        c.fill_circle(Point::new(4.0, 4.0), 1.0);
        c.set_backdrop(BLACK);
        assert!(c.cell(0, 0).unwrap().symbol.is_some());
        c.set_backdrop(Rgba::opaque(255, 255, 255));
        assert_eq!(c.cell(0, 0), Some(&SkyCell::default()));
    }

    #[test]
    fn test_widget_blits_into_buffer() {
        let mut c = canvas(3, 1);
        c.set_fill_color(Rgba::new(255, 255, 255, 1.0));
        c.fill_circle(Point::new(12.0, 8.0), 1.6);

        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        (&c).render(buf.area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "✦");
        assert_eq!(buf[(1, 0)].fg, ratatui::style::Color::Rgb(255, 255, 255));
        assert_eq!(buf[(0, 0)].bg, ratatui::style::Color::Rgb(0, 0, 0));
    }
}
