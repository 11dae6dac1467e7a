//! Seeded adapter for the `IdGenerator` port.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::ports::id_gen::IdGenerator;

/// Produces version 4 UUIDs from a seeded byte stream.
pub struct SeededIdGenerator {
    rng: Mutex<StdRng>,
}

impl SeededIdGenerator {
    /// Creates a generator whose id sequence is fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn generate_id(&self) -> String {
        let bytes: [u8; 16] = {
            let mut rng = self.rng.lock().expect("id rng lock poisoned");
            rng.random()
        };
        Builder::from_random_bytes(bytes).into_uuid().hyphenated().to_string()
    }
}
