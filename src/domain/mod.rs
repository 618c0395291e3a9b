//! Domain layer: the mapping entity, its error taxonomy and the ports the
//! store needs from the outside world.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Persistence and id-generation trait definitions
//! - [`error`] - [`StoreError`], the store's failure modes
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StoreError;
