use bevy_ecs::prelude::Resource;

/// Seeded random source shared by objects that need variation (bubble
/// timing and drift). A fixed seed keeps runs reproducible.
#[derive(Resource, Clone, Debug)]
pub struct SimRng(pub fastrand::Rng);

impl SimRng {
    pub fn with_seed(seed: u64) -> Self {
        SimRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform value in `0..=max`.
    pub fn up_to(&mut self, max: i32) -> i32 {
        self.0.i32(0..=max)
    }

    /// Uniform value in `-spread..=spread`.
    pub fn spread(&mut self, spread: i32) -> i32 {
        self.0.i32(-spread..=spread)
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
