use std::sync::{Arc, RwLock};

use memoark_core::Clock;
use memoark_core::model::{DisplayStatus, ProgressEntry, ProgressMap, VocabItem, WordStatus};
use storage::repository::ProgressRepository;

use crate::error::ProgressError;

//
// ─── PROGRESS SUMMARY ──────────────────────────────────────────────────────────
//

/// Aggregate counts over catalog words, for the dashboard.
///
/// Counts are taken over the catalog only, so stale progress keys for words
/// the catalog no longer contains never inflate them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl ProgressSummary {
    /// Mastered share of the catalog, rounded to whole percent.
    #[must_use]
    pub fn percent_mastered(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let ratio = self.mastered as f64 / self.total as f64;
        (ratio * 100.0).round() as u32
    }
}

//
// ─── PROGRESS SERVICE ──────────────────────────────────────────────────────────
//

/// Single source of truth for per-word mastery state.
///
/// Holds the progress map in memory and writes the full map through to the
/// storage slot on every mutation. There is no write-behind: when a mutation
/// returns, its effect is durable (or the error has been reported).
pub struct ProgressService {
    clock: Clock,
    repo: Arc<dyn ProgressRepository>,
    map: RwLock<ProgressMap>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            repo,
            map: RwLock::new(ProgressMap::new()),
        }
    }

    /// Populate the in-memory map from the persisted slot.
    ///
    /// Best-effort by contract: a missing slot, corrupt content, or storage
    /// failure all leave the map empty and are never surfaced. First run and
    /// recovery from a broken slot look identical to the user.
    pub async fn load(&self) {
        if let Ok(Some(persisted)) = self.repo.load().await {
            *self.write_map() = persisted;
        }
    }

    /// The display status for a word; absence of an entry reads as `Unseen`.
    #[must_use]
    pub fn display_status(&self, word: &str) -> DisplayStatus {
        let guard = self.read_map();
        DisplayStatus::from_persisted(guard.get(word).map(|entry| entry.status))
    }

    /// Record a status for a word and persist the updated map.
    ///
    /// Overwrites any previous entry for `word` with the given status and the
    /// clock's current time; all other entries are untouched. Entries are
    /// never removed here, so no word can return to `Unseen` by this path.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the durable write fails. The in-memory
    /// update is kept in that case, so the UI stays consistent with what the
    /// user just did; the caller should surface a non-fatal notice.
    pub async fn set_status(&self, word: &str, status: WordStatus) -> Result<(), ProgressError> {
        let snapshot = {
            let mut guard = self.write_map();
            guard.insert(
                word.to_string(),
                ProgressEntry::new(status, self.clock.now()),
            );
            guard.clone()
        };
        self.repo.replace(&snapshot).await?;
        Ok(())
    }

    /// A clone of the current map, for the caller to wrap in a backup
    /// container.
    #[must_use]
    pub fn export_snapshot(&self) -> ProgressMap {
        self.read_map().clone()
    }

    /// Replace the whole map with the supplied one and persist it.
    ///
    /// No validation and no merge: this is a full overwrite, irreversible
    /// except via another import. Shape-checking the payload and obtaining
    /// user confirmation are the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the durable write fails; the in-memory
    /// replacement is kept.
    pub async fn import_snapshot(&self, map: ProgressMap) -> Result<(), ProgressError> {
        let snapshot = {
            let mut guard = self.write_map();
            *guard = map;
            guard.clone()
        };
        self.repo.replace(&snapshot).await?;
        Ok(())
    }

    /// Aggregate counts over the given catalog words.
    #[must_use]
    pub fn summary(&self, catalog: &[VocabItem]) -> ProgressSummary {
        let guard = self.read_map();
        let mut summary = ProgressSummary {
            total: catalog.len(),
            ..ProgressSummary::default()
        };
        for item in catalog {
            match guard.get(&item.word).map(|entry| entry.status) {
                Some(WordStatus::Learning) => summary.learning += 1,
                Some(WordStatus::Mastered) => summary.mastered += 1,
                None => {}
            }
        }
        summary
    }

    fn read_map(&self) -> std::sync::RwLockReadGuard<'_, ProgressMap> {
        self.map.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_map(&self) -> std::sync::RwLockWriteGuard<'_, ProgressMap> {
        self.map.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
