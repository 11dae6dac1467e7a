//! Seeded adapter for the `NameGenerator` port.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::adapters::compose_name;
use crate::ports::names::NameGenerator;

/// Draws names from the built-in pools with a seeded RNG.
pub struct SeededNameGenerator {
    rng: Mutex<StdRng>,
}

impl SeededNameGenerator {
    /// Creates a generator whose name sequence is fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl NameGenerator for SeededNameGenerator {
    fn generate_name(&self) -> String {
        let mut rng = self.rng.lock().expect("name rng lock poisoned");
        compose_name(&mut *rng)
    }
}
