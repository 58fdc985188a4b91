use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use memoark_core::model::ProgressMap;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{CatalogLoadError, NoticeBar};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let catalog = ctx.catalog();
    let mut notice = use_signal(|| None::<String>);
    let mut import_path = use_signal(String::new);
    // Parsed payload waiting for the user's overwrite confirmation. Dismissal
    // simply drops it; nothing has touched the store yet.
    let mut pending_import = use_signal(|| None::<ProgressMap>);

    let Some(store) = catalog.store() else {
        return rsx! {
            CatalogLoadError { message: catalog.error_message().unwrap_or_default().to_string() }
        };
    };

    let summary = ctx.progress().summary(store.items());
    let percent = summary.percent_mastered();

    let on_export = {
        let progress = ctx.progress();
        let backups = ctx.backups();
        let backup_dir = ctx.backup_dir();
        move |_| {
            match backups.export_to_dir(progress.export_snapshot(), &backup_dir) {
                Ok(path) => notice.set(Some(format!("Backup exported to {}.", path.display()))),
                Err(err) => notice.set(Some(format!("Export failed: {err}."))),
            }
        }
    };

    let on_import_request = {
        let backups = ctx.backups();
        move |_| {
            let raw = import_path();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                notice.set(Some("Enter the path of a backup file to import.".to_string()));
                return;
            }
            match backups.import_file(Path::new(trimmed)) {
                Ok(map) => pending_import.set(Some(map)),
                Err(err) => notice.set(Some(format!("Import rejected: {err}."))),
            }
        }
    };

    let on_confirm_import = {
        let progress = ctx.progress();
        move |_| {
            let Some(map) = pending_import.write().take() else {
                return;
            };
            let progress = Arc::clone(&progress);
            spawn(async move {
                match progress.import_snapshot(map).await {
                    Ok(()) => notice.set(Some("Backup restored successfully.".to_string())),
                    Err(err) => {
                        notice.set(Some(format!("Progress could not be saved: {err}.")));
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "page dashboard",
            div { class: "dashboard__intro",
                h2 { "Dashboard" }
                p { class: "muted", "Track your vocabulary journey" }
            }

            div { class: "stat-grid",
                StatCard {
                    label: "Total",
                    value: summary.total,
                    on_open: move |_| {
                        let _ = navigator.push(Route::Dictionary { status: None });
                    },
                }
                StatCard {
                    label: "Learning",
                    value: summary.learning,
                    on_open: move |_| {
                        let _ = navigator.push(Route::Dictionary { status: Some("learning".to_string()) });
                    },
                }
                StatCard {
                    label: "Mastered",
                    value: summary.mastered,
                    on_open: move |_| {
                        let _ = navigator.push(Route::Dictionary { status: Some("mastered".to_string()) });
                    },
                }
            }

            div { class: "progress-card",
                div { class: "progress-card__row",
                    span { "Total Progress" }
                    span { "{summary.mastered} / {summary.total} words ({percent}%)" }
                }
                div { class: "progress-bar",
                    div { class: "progress-bar__fill", style: "width: {percent}%;" }
                }
            }

            button {
                class: "primary-action",
                onclick: move |_| {
                    let _ = navigator.push(Route::Study {});
                },
                "Start Session"
            }

            div { class: "backup-card",
                h3 { "Backup & Restore" }
                p { class: "muted",
                    "Export your learning progress as a JSON file, or restore from a previous backup."
                }
                div { class: "backup-card__actions",
                    button { class: "btn btn-secondary", onclick: on_export, "Export backup" }
                    input {
                        class: "backup-card__path",
                        r#type: "text",
                        placeholder: "Path to backup file...",
                        value: "{import_path}",
                        oninput: move |evt| import_path.set(evt.value()),
                    }
                    button { class: "btn btn-primary", onclick: on_import_request, "Import backup" }
                }
                if let Some(message) = notice() {
                    NoticeBar { message }
                }
            }

            if pending_import.read().is_some() {
                div { class: "modal-overlay",
                    div { class: "modal", role: "dialog", aria_modal: "true",
                        h3 { "Overwrite progress?" }
                        p { "This will overwrite your current progress. Are you sure?" }
                        div { class: "modal__actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| pending_import.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: on_confirm_import,
                                "Overwrite"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize, on_open: EventHandler<()>) -> Element {
    rsx! {
        button { class: "stat-card", onclick: move |_| on_open.call(()),
            span { class: "stat-card__value", "{value}" }
            span { class: "stat-card__label", "{label}" }
        }
    }
}
