//! Source of candidate short ids.

/// Produces candidate ids for new mappings.
///
/// Candidates are not guaranteed to be unique; the store discards any
/// candidate that is already mapped and asks for another.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
