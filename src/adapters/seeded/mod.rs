//! Seeded adapters that reproduce the same output for the same seed.
//!
//! Each port gets its own RNG stream derived from the seed, so the id
//! sequence does not shift when the name pools change.

pub mod clock;
pub mod id_gen;
pub mod names;
pub mod sampler;

pub use clock::FixedClock;
pub use id_gen::SeededIdGenerator;
pub use names::SeededNameGenerator;
pub use sampler::SeededTimestampSampler;
