use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::EventSource;
use crate::game::Event;

/// Picks each of the five events with equal probability.
pub struct UniformEventSource {
    rng: StdRng,
}

impl UniformEventSource {
    pub fn new() -> Self {
        UniformEventSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        UniformEventSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for UniformEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for UniformEventSource {
    fn next_event(&mut self) -> Event {
        Event::ALL[self.rng.random_range(0..Event::ALL.len())]
    }

    fn name(&self) -> &str {
        "Uniform"
    }
}
