//! Random number source used to generate and spawn particles.

/// A source of uniformly distributed floats in `[0, 1)`.
///
/// Production code uses [`fastrand::Rng`]; tests inject scripted sources so
/// spawn decisions are reproducible.
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl RandomSource for fastrand::Rng {
    fn next_f32(&mut self) -> f32 {
        self.f32()
    }
}
