//! ID generator port for producing unique record identifiers.

/// Generates unique identifiers.
///
/// Substituting a seeded implementation yields the same id sequence on
/// every run.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
