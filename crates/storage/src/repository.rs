use async_trait::async_trait;
use memoark_core::model::ProgressMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// The single named slot that holds the JSON-serialized progress map.
///
/// The key carries the format version so a future layout change can use a
/// different key without clashing with data written by older releases.
pub const PROGRESS_SLOT_KEY: &str = "memoark_progress_v1";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the progress slot.
///
/// The slot is a whole-value store: every write replaces the full map. There
/// is no per-entry operation at this layer; merging one entry into the map
/// is the progress service's job.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Read the persisted map, or `None` if the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the slot content is not a
    /// valid JSON progress map, or `StorageError::Connection` on I/O failure.
    async fn load(&self) -> Result<Option<ProgressMap>, StorageError>;

    /// Overwrite the slot with the full serialized map.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the map cannot be stored.
    async fn replace(&self, map: &ProgressMap) -> Result<(), StorageError>;
}

/// Simple in-memory slot implementation for testing and prototyping.
///
/// Stores the serialized JSON text rather than the typed map, so it behaves
/// like the real slot: content can be seeded with arbitrary (even corrupt)
/// text to exercise load-failure paths.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slot: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Seed the slot with raw text, bypassing serialization.
    #[must_use]
    pub fn with_raw_slot(content: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(content.into()))),
        }
    }

    /// The raw slot text as currently stored, if any.
    ///
    /// # Panics
    ///
    /// Panics if the slot mutex is poisoned.
    #[must_use]
    pub fn raw_slot(&self) -> Option<String> {
        self.slot.lock().expect("slot mutex poisoned").clone()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<ProgressMap>, StorageError> {
        let guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
        }
    }

    async fn replace(&self, map: &ProgressMap) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string(map).map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(serialized);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoark_core::model::{ProgressEntry, WordStatus};
    use memoark_core::time::fixed_now;

    #[tokio::test]
    async fn empty_slot_loads_as_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_then_load_round_trips() {
        let repo = InMemoryRepository::new();
        let mut map = ProgressMap::new();
        map.insert(
            "apple".to_string(),
            ProgressEntry::new(WordStatus::Learning, fixed_now()),
        );

        repo.replace(&map).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, map);
    }

    #[tokio::test]
    async fn corrupt_slot_content_is_a_serialization_error() {
        let repo = InMemoryRepository::with_raw_slot("{not json");
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn replace_overwrites_the_whole_slot() {
        let repo = InMemoryRepository::new();
        let mut first = ProgressMap::new();
        first.insert(
            "apple".to_string(),
            ProgressEntry::new(WordStatus::Mastered, fixed_now()),
        );
        repo.replace(&first).await.unwrap();

        let second = ProgressMap::new();
        repo.replace(&second).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }
}
