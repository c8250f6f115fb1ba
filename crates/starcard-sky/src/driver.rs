//! Runs the sky animation on the host's repaint cadence.

use starcard_core::ColorScheme;

use crate::canvas::Canvas;
use crate::field::ParticleField;
use crate::random::RandomSource;
use crate::render::{FRAME_MS, render_frame};

/// Handle of a requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub u64);

/// The host's repaint primitive: request a callback on the next repaint
/// opportunity, or cancel one that has not fired yet.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameId;
    fn cancel(&mut self, id: FrameId);
}

/// Whether the animation loop is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriverState {
    #[default]
    Stopped,
    Running,
}

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was stepped and painted.
    Painted,
    /// The surface has no area; nothing was stepped or painted but the loop
    /// keeps going.
    Empty,
    /// The callback was stale or the loop is stopped. Nothing happened.
    Ignored,
}

/// Owns the particle field and drives it frame by frame.
///
/// Every frame spawns, advances and renders, in that order, then requests
/// the next frame while still running. `stop` cancels the pending frame and
/// any callback that still arrives for it is ignored, so a stopped driver
/// never paints.
#[derive(Debug)]
pub struct AnimationDriver<S, R> {
    scheduler: S,
    rng: R,
    field: ParticleField,
    state: DriverState,
    pending: Option<FrameId>,
    reduced_motion: bool,
    visible: bool,
    pixel_ratio: f32,
    frame_ms: u64,
    elapsed_ms: u64,
    /// Whether the surface holds a frame of the current field.
    shown: bool,
}

impl<S: FrameScheduler, R: RandomSource> AnimationDriver<S, R> {
    /// Create a stopped driver with an empty field.
    pub fn new(scheduler: S, rng: R, pixel_ratio: f32) -> Self {
        Self {
            scheduler,
            rng,
            field: ParticleField::default(),
            state: DriverState::Stopped,
            pending: None,
            reduced_motion: false,
            visible: true,
            pixel_ratio,
            frame_ms: FRAME_MS,
            elapsed_ms: 0,
            shown: false,
        }
    }

    /// Set the initial reduced-motion preference without starting or
    /// stopping anything.
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Animation time that passes per frame.
    pub fn with_frame_interval(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start the loop unless reduced motion is requested. Restarting a
    /// running loop cancels its pending frame first, so there is never more
    /// than one loop.
    pub fn start(&mut self) {
        self.cancel_pending();
        if self.reduced_motion {
            self.state = DriverState::Stopped;
            tracing::debug!("sky animation held back by reduced motion");
            return;
        }
        self.state = DriverState::Running;
        self.pending = Some(self.scheduler.request_frame());
        tracing::debug!("sky animation started");
    }

    /// Stop the loop and cancel the pending frame.
    pub fn stop(&mut self) {
        self.cancel_pending();
        if self.state == DriverState::Running {
            tracing::debug!("sky animation stopped");
        }
        self.state = DriverState::Stopped;
    }

    /// The surface was hidden or shown again.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible { self.start() } else { self.stop() }
    }

    /// The reduced-motion preference changed.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        if reduced_motion { self.stop() } else { self.start() }
    }

    /// Resize the surface and rebuild the field for it. The run state is
    /// left as it was.
    pub fn resize<C: Canvas + ?Sized>(&mut self, canvas: &mut C, width: u32, height: u32) {
        canvas.resize(width, height);
        self.shown = false;
        self.field = ParticleField::regenerate(
            canvas.width(),
            canvas.height(),
            self.pixel_ratio,
            &mut self.rng,
        );
        tracing::debug!(
            width = canvas.width(),
            height = canvas.height(),
            stars = self.field.stars().len(),
            "sky field regenerated"
        );
    }

    /// Frame callback for `id`.
    pub fn on_frame<C: Canvas + ?Sized>(
        &mut self,
        id: FrameId,
        canvas: &mut C,
        scheme: &ColorScheme,
    ) -> FrameOutcome {
        if self.state != DriverState::Running || self.pending != Some(id) {
            return FrameOutcome::Ignored;
        }
        self.pending = None;

        let outcome = if canvas.is_empty() {
            FrameOutcome::Empty
        } else {
            self.elapsed_ms += self.frame_ms;
            self.field.maybe_spawn_meteor(&mut self.rng);
            self.field.advance();
            render_frame(canvas, &self.field, scheme, self.elapsed_ms);
            self.shown = true;
            FrameOutcome::Painted
        };

        if self.state == DriverState::Running {
            self.pending = Some(self.scheduler.request_frame());
        }
        outcome
    }

    /// Paint the last frame again without stepping the field, for when the
    /// surface lost its image while the loop is stopped. A surface that
    /// never showed the current field stays blank.
    pub fn repaint<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        scheme: &ColorScheme,
    ) -> FrameOutcome {
        if !self.shown || canvas.is_empty() {
            return FrameOutcome::Ignored;
        }
        render_frame(canvas, &self.field, scheme, self.elapsed_ms);
        FrameOutcome::Painted
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}
