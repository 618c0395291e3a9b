//! Repository trait for the durable snapshot of the mapping.

use std::collections::HashMap;

use crate::domain::error::StoreError;
use async_trait::async_trait;

/// The full id -> target mapping, the unit of persistence.
pub type Mapping = HashMap<String, String>;

/// Durable storage for the whole mapping.
///
/// There is no incremental write: every save replaces the previous snapshot
/// with the complete mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonSnapshotRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads the snapshot.
    ///
    /// When no snapshot exists yet, an empty one is created and an empty
    /// mapping is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the snapshot cannot be read,
    /// parsed, or (when missing) created.
    async fn load(&self) -> Result<Mapping, StoreError>;

    /// Replaces the snapshot with `mapping`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the write does not complete.
    async fn save(&self, mapping: &Mapping) -> Result<(), StoreError>;
}
