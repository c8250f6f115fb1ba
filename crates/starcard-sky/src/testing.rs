//! Test doubles for the sky: a canvas that records draw calls, a scripted
//! random source and a scheduler that only counts requests.

use std::collections::BTreeSet;

use starcard_core::Rgba;

use crate::canvas::{Canvas, PaintState, Point};
use crate::driver::{FrameId, FrameScheduler};
use crate::random::RandomSource;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleOp {
    pub center: Point,
    pub radius: f32,
    pub state: PaintState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineOp {
    pub from: Point,
    pub to: Point,
    pub state: PaintState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f32, height: f32 },
    Circle(CircleOp),
    Line(LineOp),
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub state: PaintState,
    pub ops: Vec<DrawOp>,
    pub resizes: usize,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn circles(&self) -> Vec<CircleOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<LineOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of frames painted, counted by their opening clear.
    pub fn frames(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.resizes += 1;
    }

    fn clear_rect(&mut self, _x: f32, _y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
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
        self.state.global_alpha = alpha;
    }

    fn set_shadow_color(&mut self, color: Rgba) {
        self.state.shadow_color = color;
    }

    fn set_shadow_blur(&mut self, blur: f32) {
        self.state.shadow_blur = blur;
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.ops.push(DrawOp::Circle(CircleOp {
            center,
            radius,
            state: self.state,
        }));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line(LineOp {
            from,
            to,
            state: self.state,
        }));
    }
}

/// Replays a fixed list of values, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty());
        Self { values, next: 0 }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

/// Hands out increasing frame ids and remembers which are still live.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    next_id: u64,
    pub live: BTreeSet<FrameId>,
    pub requested: Vec<FrameId>,
    pub cancelled: Vec<FrameId>,
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.live.insert(id);
        self.requested.push(id);
        id
    }

    fn cancel(&mut self, id: FrameId) {
        self.live.remove(&id);
        self.cancelled.push(id);
    }
}
