//! Application layer services implementing business logic.
//!
//! Services consume the domain's repository traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_store::MappingStore`] - id allocation, lookup and persistence

pub mod services;
