//! Business logic services for the application layer.

pub mod mapping_store;

pub use mapping_store::MappingStore;
