//! Utility functions shared across layers.
//!
//! - [`id_generator`] - cryptographically secure short id generation

pub mod id_generator;
