//! Core domain entities.
//!
//! The service has exactly one entity: [`MappingEntry`], the association
//! between a short id and the URL it redirects to. The store as a whole is
//! an unordered map of these entries keyed by id.

pub mod mapping;

pub use mapping::MappingEntry;
