use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source owned by one game session.
///
/// Seeded explicitly so a whole game (mistake rolls and heuristic picks) can
/// be replayed from the seed alone.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, 1)`.
    fn random_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// True with probability `probability`. Zero never hits, one always does.
    pub fn roll(&mut self, probability: f64) -> bool {
        self.random_unit() < probability
    }

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..items.len());
        Some(items[idx])
    }
}
