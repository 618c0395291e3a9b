//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::MappingStore;
use crate::infrastructure::persistence::JsonSnapshotRepository;

/// The store type the server runs with.
pub type Store = MappingStore<JsonSnapshotRepository>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<Store>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Builds the public short link for `id`.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}
