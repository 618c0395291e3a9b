//! JSON file implementation of the snapshot repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::StoreError;
use crate::domain::repositories::{Mapping, SnapshotRepository};

/// Snapshot stored as a single pretty-printed JSON object `{ "<id>": "<url>" }`.
///
/// Every save writes the full mapping to a sibling `*.tmp` file, syncs it and
/// renames it over the snapshot, so a crash mid-write leaves the previous
/// snapshot in place. The write runs as one blocking task that owns the
/// write lock until the rename is done; a caller that stops waiting does not
/// release the lock early, so the next save never touches a temp file that
/// is still being written.
pub struct JsonSnapshotRepository {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonSnapshotRepository {
    /// Creates a repository for the snapshot at `path`.
    ///
    /// Nothing is touched on disk until [`SnapshotRepository::load`] or
    /// [`SnapshotRepository::save`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("snapshot"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persistence_error(&self, e: impl std::fmt::Display) -> StoreError {
        StoreError::Persistence(format!("{}: {}", self.path.display(), e))
    }

    async fn write_snapshot(&self, mapping: &Mapping) -> Result<(), StoreError> {
        // Sorted keys keep the file stable between saves.
        let ordered: BTreeMap<&String, &String> = mapping.iter().collect();
        let body = serde_json::to_vec_pretty(&ordered).map_err(|e| self.persistence_error(e))?;

        let guard = self.write_lock.clone().lock_owned().await;
        let path = self.path.clone();
        let temp_path = self.temp_path();

        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            replace_file(&path, &temp_path, &body)
        })
        .await
        .map_err(|e| self.persistence_error(e))?
        .map_err(|e| self.persistence_error(e))?;

        debug!("Snapshot written: {} entries", mapping.len());
        Ok(())
    }
}

/// Writes `body` to `temp_path`, syncs it and renames it over `path`.
fn replace_file(path: &Path, temp_path: &Path, body: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let written = (|| -> io::Result<()> {
        let mut file = File::create(temp_path)?;
        file.write_all(body)?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(temp_path, path)
    })();

    if let Err(e) = written {
        if let Err(cleanup) = std::fs::remove_file(temp_path)
            && cleanup.kind() != ErrorKind::NotFound
        {
            warn!(
                "Failed to remove temporary snapshot {}: {}",
                temp_path.display(),
                cleanup
            );
        }
        return Err(e);
    }

    Ok(())
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotRepository {
    async fn load(&self) -> Result<Mapping, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                let mapping: Mapping =
                    serde_json::from_slice(&bytes).map_err(|e| self.persistence_error(e))?;
                info!(
                    "Loaded snapshot {} ({} entries)",
                    self.path.display(),
                    mapping.len()
                );
                Ok(mapping)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No snapshot at {}, starting with an empty mapping",
                    self.path.display()
                );
                let mapping = Mapping::new();
                self.write_snapshot(&mapping).await?;
                Ok(mapping)
            }
            Err(e) => Err(self.persistence_error(e)),
        }
    }

    async fn save(&self, mapping: &Mapping) -> Result<(), StoreError> {
        self.write_snapshot(mapping).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonSnapshotRepository::new("/var/lib/snaplink/db.json");
        assert_eq!(
            repo.temp_path(),
            PathBuf::from("/var/lib/snaplink/db.json.tmp")
        );
    }

    #[test]
    fn test_temp_path_relative() {
        let repo = JsonSnapshotRepository::new("db.json");
        assert_eq!(repo.temp_path(), PathBuf::from("db.json.tmp"));
    }

    #[test]
    fn test_persistence_error_mentions_path() {
        let repo = JsonSnapshotRepository::new("db.json");
        let err = repo.persistence_error("disk full");
        assert!(err.to_string().contains("db.json: disk full"));
    }
}
