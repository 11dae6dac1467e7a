//! Name generator port for producing human-readable display names.

/// Produces display names for generated records.
///
/// Names are not required to be unique; collisions are expected and are
/// what make name search return more than one record.
pub trait NameGenerator: Send + Sync {
    /// Returns a new full name such as `"Ada Lovelace"`.
    fn generate_name(&self) -> String;
}
