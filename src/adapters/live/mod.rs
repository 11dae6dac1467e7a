//! Live adapters backed by the system clock and thread-local randomness.

pub mod clock;
pub mod id_gen;
pub mod names;
pub mod sampler;

pub use clock::LiveClock;
pub use id_gen::LiveIdGenerator;
pub use names::LiveNameGenerator;
pub use sampler::LiveTimestampSampler;
