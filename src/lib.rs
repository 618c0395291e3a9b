//! # snaplink
//!
//! A small URL shortener built with Axum. Short ids map to target URLs; the
//! whole mapping lives in memory and is written to a JSON snapshot on every
//! change.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, store errors, port traits
//! - **Application Layer** ([`application`]) - [`MappingStore`]: id allocation, lookup, persistence
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON snapshot repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! export PORT=3000
//! cargo run
//!
//! curl -X POST localhost:3000/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::MappingStore;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MappingStore;
    pub use crate::domain::StoreError;
    pub use crate::domain::entities::MappingEntry;
    pub use crate::domain::repositories::{IdGenerator, Mapping, SnapshotRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonSnapshotRepository;
    pub use crate::state::AppState;
}
