//! Port traits the mapping store depends on.
//!
//! - [`SnapshotRepository`] - durable load/save of the full mapping
//! - [`IdGenerator`] - source of candidate short ids
//!
//! Concrete implementations live in `crate::infrastructure::persistence` and
//! `crate::utils::id_generator`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod id_generator;
pub mod snapshot_repository;

pub use id_generator::IdGenerator;
pub use snapshot_repository::{Mapping, SnapshotRepository};

#[cfg(test)]
pub use id_generator::MockIdGenerator;
#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
