//! Mapping entry entity: one short id pointing at one target URL.

use serde::Serialize;

/// A single id-to-target association.
///
/// Entries are immutable once created: the store never rewrites or removes
/// the target behind an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub id: String,
    pub target: String,
}

impl MappingEntry {
    /// Creates a new MappingEntry instance.
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_entry_creation() {
        let entry = MappingEntry::new("abc123", "https://example.com");

        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.target, "https://example.com");
    }

    #[test]
    fn test_mapping_entry_keeps_target_verbatim() {
        let entry = MappingEntry::new("x", "javascript:alert(1)");
        assert_eq!(entry.target, "javascript:alert(1)");
    }
}
