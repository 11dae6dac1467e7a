//! Live adapter for the `NameGenerator` port.

use crate::adapters::compose_name;
use crate::ports::NameGenerator;

/// Draws names from the built-in pools using the thread-local RNG.
pub struct LiveNameGenerator;

impl NameGenerator for LiveNameGenerator {
    fn generate_name(&self) -> String {
        compose_name(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_first_and_last_name() {
        let name = LiveNameGenerator.generate_name();
        let parts: Vec<&str> = name.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| !p.is_empty()));
    }
}
