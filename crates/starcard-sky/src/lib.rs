//! Starfield and meteor background for the starcard profile card.
//!
//! The sky is split the same way a browser page would split it: a
//! [`ParticleField`] holding stars and meteors, a renderer painting one frame
//! of it onto any [`Canvas`], and an [`AnimationDriver`] that repaints on a
//! host-provided [`FrameScheduler`] and starts or stops on visibility and
//! reduced-motion changes. [`CellCanvas`] is the terminal drawing surface.

mod canvas;
mod cells;
mod chars;
mod driver;
mod field;
mod random;
mod render;

#[cfg(test)]
mod testing;

pub use canvas::{Canvas, PaintState, Point};
pub use cells::{CellCanvas, SkyCell};
pub use driver::{AnimationDriver, DriverState, FrameId, FrameOutcome, FrameScheduler};
pub use field::{
    MAX_METEORS, MAX_STARS, METEOR_LIFETIME, METEOR_SPAWN_CHANCE, Meteor, ParticleField,
    STAR_DENSITY_PX, Star, star_count,
};
pub use random::RandomSource;
pub use render::{FRAME_MS, render_frame};
