#![allow(dead_code)]

use snaplink::application::services::MappingStore;
use snaplink::infrastructure::persistence::JsonSnapshotRepository;
use snaplink::state::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub const BASE_URL: &str = "https://s.example.com";

pub fn snapshot_path(dir: &TempDir) -> PathBuf {
    dir.path().join("db.json")
}

pub fn write_snapshot(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
}

pub fn read_snapshot(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub async fn open_store(path: &Path) -> MappingStore<JsonSnapshotRepository> {
    MappingStore::open(Arc::new(JsonSnapshotRepository::new(path)))
        .await
        .unwrap()
}

/// Returns state backed by a fresh snapshot in a temporary directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn create_test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&snapshot_path(&dir)).await;

    (AppState::new(Arc::new(store), BASE_URL), dir)
}
