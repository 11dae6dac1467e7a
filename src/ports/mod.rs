//! Port traits defining external boundaries.
//!
//! Each trait covers one source of nondeterminism the record generator
//! depends on (time, ids, names, timestamps). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod names;
pub mod sampler;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use names::NameGenerator;
pub use sampler::TimestampSampler;
