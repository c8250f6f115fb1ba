//! Star and meteor particle state.

use crate::random::RandomSource;

/// Upper bound on the number of stars, whatever the surface size.
pub const MAX_STARS: usize = 350;

/// Surface area, in device pixels per unit of pixel ratio, that earns one star.
pub const STAR_DENSITY_PX: f64 = 9000.0;

/// Upper bound on concurrently visible meteors.
pub const MAX_METEORS: usize = 3;

/// Chance per frame that a meteor is spawned.
pub const METEOR_SPAWN_CHANCE: f32 = 0.02;

/// Frames a meteor lives for.
pub const METEOR_LIFETIME: i32 = 120;

/// Frames over which a meteor fades out before expiring.
const METEOR_FADE_FRAMES: f32 = 60.0;

/// Amplitude of the star twinkle around its base brightness.
const TWINKLE_AMPLITUDE: f32 = 0.25;

/// A background star. Only its phase changes over time, and that is derived
/// from elapsed time rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position in device pixels.
    pub x: f32,
    pub y: f32,
    /// Radius in device pixels.
    pub radius: f32,
    /// Brightness the twinkle oscillates around, in `[0.2, 0.7]`.
    pub base: f32,
    /// Oscillation speed in radians per millisecond.
    pub speed: f32,
}

impl Star {
    /// Opacity of the star at `elapsed_ms`, clamped to `[0, 1]`.
    pub fn alpha(&self, elapsed_ms: u64) -> f32 {
        let phase = (elapsed_ms as f64 * self.speed as f64).sin() as f32;
        (self.base + phase * TWINKLE_AMPLITUDE).clamp(0.0, 1.0)
    }
}

/// A meteor streaking across the top of the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meteor {
    /// Head position in device pixels.
    pub x: f32,
    pub y: f32,
    /// Velocity in device pixels per frame.
    pub vx: f32,
    pub vy: f32,
    /// Remaining frames.
    pub life: i32,
}

impl Meteor {
    /// Opacity of the streak: fully opaque until the last
    /// `METEOR_FADE_FRAMES` frames, then fading linearly to zero.
    pub fn fade_alpha(&self) -> f32 {
        (self.life as f32 / METEOR_FADE_FRAMES).clamp(0.0, 1.0)
    }
}

/// Number of stars generated for a `width` x `height` surface.
pub fn star_count(width: u32, height: u32, pixel_ratio: f32) -> usize {
    let area = width as f64 * height as f64;
    let per_star = STAR_DENSITY_PX * pixel_ratio.max(f32::MIN_POSITIVE) as f64;
    ((area / per_star).floor() as usize).min(MAX_STARS)
}

/// All particles of the sky, sized for one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    stars: Vec<Star>,
    meteors: Vec<Meteor>,
    /// Surface width in device pixels.
    width: u32,
    /// Surface height in device pixels.
    height: u32,
    pixel_ratio: f32,
}

impl ParticleField {
    /// Build a fresh field for the given surface. Meteors start empty.
    pub fn regenerate(
        width: u32,
        height: u32,
        pixel_ratio: f32,
        rng: &mut impl RandomSource,
    ) -> Self {
        let w = width as f32;
        let h = height as f32;
        let stars = (0..star_count(width, height, pixel_ratio))
            .map(|_| Star {
                x: rng.next_f32() * w,
                y: rng.next_f32() * h,
                radius: (rng.next_f32() * 1.2 + 0.4) * pixel_ratio,
                base: rng.next_f32() * 0.5 + 0.2,
                speed: 0.002 + rng.next_f32() * 0.004,
            })
            .collect();

        Self {
            stars,
            meteors: Vec::new(),
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Roll for a new meteor and spawn one if the roll succeeds and there is
    /// room. Returns whether a meteor was added.
    pub fn maybe_spawn_meteor(&mut self, rng: &mut impl RandomSource) -> bool {
        if rng.next_f32() >= METEOR_SPAWN_CHANCE || self.meteors.len() >= MAX_METEORS {
            return false;
        }

        let dpr = self.pixel_ratio;
        // Half of the meteors enter from off the left edge, the rest appear
        // somewhere over the left half.
        let x = if rng.next_f32() < 0.5 {
            -20.0 * dpr
        } else {
            rng.next_f32() * self.width as f32 * 0.5
        };
        let y = rng.next_f32() * self.height as f32 * 0.3;

        self.meteors.push(Meteor {
            x,
            y,
            vx: 3.0 * dpr,
            vy: 1.6 * dpr,
            life: METEOR_LIFETIME,
        });
        true
    }

    /// Move every meteor one frame along and drop the ones that expired.
    pub fn advance(&mut self) {
        for meteor in &mut self.meteors {
            meteor.x += meteor.vx;
            meteor.y += meteor.vy;
            meteor.life -= 1;
        }
        self.meteors.retain(|m| m.life > 0);
    }

    #[cfg(test)]
    pub(crate) fn push_meteor(&mut self, meteor: Meteor) {
        self.meteors.push(meteor);
    }
}
