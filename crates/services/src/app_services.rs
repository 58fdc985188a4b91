use std::path::{Path, PathBuf};
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::backup_service::BackupService;
use crate::catalog::CatalogStore;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Outcome of the one-shot catalog load.
///
/// Catalog failure is deliberately not fatal to startup: the app launches
/// and the main views render the load-error message instead of content.
pub enum CatalogState {
    Loaded(CatalogStore),
    Failed { message: String },
}

impl CatalogState {
    #[must_use]
    pub fn store(&self) -> Option<&CatalogStore> {
        match self {
            Self::Loaded(store) => Some(store),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed { message } => Some(message),
        }
    }
}

/// Assembles app-facing services over storage and the catalog file.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogState>,
    progress: Arc<ProgressService>,
    backups: Arc<BackupService>,
    backup_dir: PathBuf,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, loading the catalog and
    /// the persisted progress slot.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` only for storage initialization failures.
    /// A broken catalog file yields `CatalogState::Failed`, and a broken
    /// progress slot silently yields empty progress.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        catalog_path: &Path,
        backup_dir: PathBuf,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::assemble(storage, clock, catalog_path, backup_dir).await)
    }

    /// Build services over any storage backend (used by UI tests with the
    /// in-memory repository).
    pub async fn with_storage(
        storage: Storage,
        clock: Clock,
        catalog_path: &Path,
        backup_dir: PathBuf,
    ) -> Self {
        Self::assemble(storage, clock, catalog_path, backup_dir).await
    }

    async fn assemble(
        storage: Storage,
        clock: Clock,
        catalog_path: &Path,
        backup_dir: PathBuf,
    ) -> Self {
        let catalog = match CatalogStore::from_json_file(catalog_path) {
            Ok(store) => CatalogState::Loaded(store),
            Err(_) => CatalogState::Failed {
                message: format!(
                    "Failed to load vocabulary data. Please ensure {} exists.",
                    catalog_path.display()
                ),
            },
        };

        let progress = ProgressService::new(clock, Arc::clone(&storage.progress));
        progress.load().await;

        Self {
            catalog: Arc::new(catalog),
            progress: Arc::new(progress),
            backups: Arc::new(BackupService::new(clock)),
            backup_dir,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogState> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn backups(&self) -> Arc<BackupService> {
        Arc::clone(&self.backups)
    }

    #[must_use]
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoark_core::time::fixed_clock;

    #[tokio::test]
    async fn missing_catalog_marks_views_failed_but_boots() {
        let services = AppServices::with_storage(
            Storage::in_memory(),
            fixed_clock(),
            Path::new("no/such/catalog.json"),
            PathBuf::from("backups"),
        )
        .await;

        let catalog = services.catalog();
        assert!(catalog.store().is_none());
        let message = catalog.error_message().unwrap();
        assert!(message.contains("no/such/catalog.json"));

        // The progress store still works with an empty map.
        assert!(services.progress().export_snapshot().is_empty());
    }
}
