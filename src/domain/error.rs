//! Error taxonomy of the mapping store.

use thiserror::Error;

/// Failures returned by [`crate::application::services::MappingStore`].
///
/// Every variant leaves the in-memory mapping and the durable snapshot
/// consistent with each other.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create` was called without a target URL.
    #[error("url is required")]
    MissingTarget,

    /// The requested id is already mapped.
    #[error("ID already taken: {id}")]
    DuplicateId { id: String },

    /// No mapping exists for the id.
    #[error("Short URL not found: {id}")]
    NotFound { id: String },

    /// Reading or writing the snapshot failed.
    #[error("Snapshot persistence failed: {0}")]
    Persistence(String),
}
