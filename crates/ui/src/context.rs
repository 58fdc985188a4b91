use std::path::PathBuf;
use std::sync::Arc;

use services::{BackupService, CatalogState, ProgressService};

/// UI-facing surface of the application composition root.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogState>;
    fn progress(&self) -> Arc<ProgressService>;
    fn backups(&self) -> Arc<BackupService>;
    fn backup_dir(&self) -> PathBuf;
}

/// Shared handles every view reaches through `use_context`.
///
/// The progress service is the single owned store; views get a reference
/// here rather than any ambient global.
#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogState>,
    progress: Arc<ProgressService>,
    backups: Arc<BackupService>,
    backup_dir: PathBuf,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            backups: app.backups(),
            backup_dir: app.backup_dir(),
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
    pub fn backup_dir(&self) -> PathBuf {
        self.backup_dir.clone()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app.as_ref())
}
