//! Snapshot repository implementations.
//!
//! - [`JsonSnapshotRepository`] - full-mapping JSON snapshot on the local filesystem

pub mod json_snapshot_repository;

pub use json_snapshot_repository::JsonSnapshotRepository;
