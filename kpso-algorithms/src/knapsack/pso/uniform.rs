use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Source of uniform samples driving every stochastic choice of the swarm.
pub trait UniformSource {
    /// Next sample in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapts a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<SmallRng> {
    pub fn seeded(seed: &[u8; 32]) -> Self {
        Self(SmallRng::from_seed(*seed))
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
