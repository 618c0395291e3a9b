//! Mapping store: id allocation, lookup and durable persistence.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::StoreError;
use crate::domain::entities::MappingEntry;
use crate::domain::repositories::{IdGenerator, Mapping, SnapshotRepository};
use crate::utils::id_generator::RandomHexGenerator;

/// Sole owner of the id -> target mapping.
///
/// The in-memory map is the source of truth for reads; the snapshot behind
/// `R` is the source of truth across restarts. Every successful `create`
/// writes the full mapping to the snapshot before returning. The new entry
/// is saved from a copy of the map and only inserted into memory once the
/// save succeeds, all under the write lock, so no reader or writer observes
/// an entry that is not yet durable, even if the `create` future is dropped
/// mid-save.
pub struct MappingStore<R: SnapshotRepository, G: IdGenerator = RandomHexGenerator> {
    repository: Arc<R>,
    generator: G,
    mapping: RwLock<Mapping>,
}

impl<R: SnapshotRepository> MappingStore<R> {
    /// Loads the snapshot and opens a store that generates random hex ids.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the snapshot cannot be loaded.
    pub async fn open(repository: Arc<R>) -> Result<Self, StoreError> {
        Self::open_with_generator(repository, RandomHexGenerator).await
    }
}

impl<R: SnapshotRepository, G: IdGenerator> MappingStore<R, G> {
    /// Loads the snapshot and opens a store using `generator` for new ids.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the snapshot cannot be loaded.
    pub async fn open_with_generator(repository: Arc<R>, generator: G) -> Result<Self, StoreError> {
        let mapping = repository.load().await?;

        Ok(Self {
            repository,
            generator,
            mapping: RwLock::new(mapping),
        })
    }

    /// Creates a mapping for `target`.
    ///
    /// # Id Allocation
    ///
    /// - If `requested_id` is a non-empty string, it is used as-is or the call
    ///   fails with a conflict
    /// - Otherwise ids are generated until one is found that is not mapped yet;
    ///   there is no retry cap
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissingTarget`] if `target` is empty
    /// - [`StoreError::DuplicateId`] if `requested_id` is already mapped
    /// - [`StoreError::Persistence`] if the snapshot write fails; memory is
    ///   left unchanged
    pub async fn create(
        &self,
        target: String,
        requested_id: Option<String>,
    ) -> Result<MappingEntry, StoreError> {
        if target.is_empty() {
            return Err(StoreError::MissingTarget);
        }

        let mut mapping = self.mapping.write().await;

        let id = match requested_id.filter(|id| !id.is_empty()) {
            Some(id) => {
                if mapping.contains_key(&id) {
                    warn!("Requested id already taken: {}", id);
                    return Err(StoreError::DuplicateId { id });
                }
                id
            }
            None => self.generate_unique_id(&mapping),
        };

        let mut next = mapping.clone();
        next.insert(id.clone(), target.clone());

        if let Err(e) = self.repository.save(&next).await {
            error!("Failed to persist mapping for {}: {}", id, e);
            return Err(e);
        }

        *mapping = next;

        info!("Created mapping {} -> {}", id, target);

        Ok(MappingEntry::new(id, target))
    }

    /// Returns the target stored for `id`, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `id` was never created.
    pub async fn resolve(&self, id: &str) -> Result<String, StoreError> {
        let mapping = self.mapping.read().await;

        match mapping.get(id) {
            Some(target) => {
                debug!("Resolved {} -> {}", id, target);
                Ok(target.clone())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Writes the current mapping to the snapshot.
    ///
    /// Called once at shutdown. Every `create` already persists, so this only
    /// matters if the snapshot was modified or removed behind the store's back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the write fails.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let mapping = self.mapping.read().await;
        self.repository.save(&mapping).await?;
        info!("Snapshot flushed ({} entries)", mapping.len());
        Ok(())
    }

    /// Number of mappings.
    pub async fn len(&self) -> usize {
        self.mapping.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.mapping.read().await.is_empty()
    }

    /// All mappings, sorted by id.
    pub async fn entries(&self) -> Vec<MappingEntry> {
        let mapping = self.mapping.read().await;

        let mut entries: Vec<MappingEntry> = mapping
            .iter()
            .map(|(id, target)| MappingEntry::new(id.as_str(), target.as_str()))
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    fn generate_unique_id(&self, mapping: &Mapping) -> String {
        loop {
            let candidate = self.generator.generate();

            if !mapping.contains_key(&candidate) {
                return candidate;
            }

            debug!("Generated id collided with existing mapping: {}", candidate);
        }
    }
}
