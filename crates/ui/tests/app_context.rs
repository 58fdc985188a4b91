use std::path::{Path, PathBuf};
use std::sync::Arc;

use memoark_core::time::fixed_clock;
use services::{AppServices, BackupService, CatalogState, ProgressService};
use storage::repository::Storage;
use ui::{UiApp, build_app_context};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogState> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn backups(&self) -> Arc<BackupService> {
        self.services.backups()
    }

    fn backup_dir(&self) -> PathBuf {
        self.services.backup_dir().to_path_buf()
    }
}

#[tokio::test]
async fn context_carries_the_composition_roots_services() {
    let services = AppServices::with_storage(
        Storage::in_memory(),
        fixed_clock(),
        Path::new("no/such/catalog.json"),
        PathBuf::from("backups"),
    )
    .await;

    let ctx = build_app_context(Arc::new(TestApp { services }));

    // Catalog failure surfaces as a per-view message, not a boot failure.
    assert!(ctx.catalog().store().is_none());
    assert!(ctx.catalog().error_message().is_some());
    assert_eq!(ctx.backup_dir(), PathBuf::from("backups"));
    assert!(ctx.progress().export_snapshot().is_empty());
}

#[tokio::test]
async fn context_serves_a_loaded_catalog() {
    let path = std::env::temp_dir().join(format!("memoark_ui_catalog_{}.json", std::process::id()));
    let json = r#"[
        {
            "word": "ledger",
            "pos": "n.",
            "level": 2,
            "content": {
                "core_meaning": "账簿",
                "ipa": "/ˈledʒər/",
                "definitions": [{ "en": "a book of financial accounts", "cn": "账簿" }]
            }
        }
    ]"#;
    std::fs::write(&path, json).unwrap();

    let services = AppServices::with_storage(
        Storage::in_memory(),
        fixed_clock(),
        &path,
        PathBuf::from("backups"),
    )
    .await;
    std::fs::remove_file(&path).ok();

    let ctx = build_app_context(Arc::new(TestApp { services }));
    let catalog = ctx.catalog();
    let store = catalog.store().unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("ledger").is_some());
}
