use std::sync::Arc;

use dioxus::prelude::*;

use memoark_core::model::{DisplayStatus, VocabItem, WordStatus};

use crate::context::AppContext;
use crate::views::{CatalogLoadError, NoticeBar};
use crate::vm::{DictionaryQuery, StatusFilter, visible_page};

#[component]
pub fn DictionaryView(status: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| StatusFilter::from_query(status.as_deref()));
    let mut level_filter = use_signal(|| None::<u32>);
    let mut page = use_signal(|| 1_usize);
    // Position within the currently visible list, not a catalog index.
    let mut selected = use_signal(|| None::<usize>);
    let mut notice = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0_u32);

    let Some(store) = catalog.store() else {
        return rsx! {
            CatalogLoadError { message: catalog.error_message().unwrap_or_default().to_string() }
        };
    };

    // Reading the tick subscribes this view to status mutations.
    let _tick = refresh();
    let snapshot = ctx.progress().export_snapshot();
    let query = DictionaryQuery {
        search: search(),
        status: status_filter(),
        level: level_filter(),
        page: page(),
    };
    let view = visible_page(store.items(), &snapshot, &query);
    let visible: Vec<VocabItem> = view
        .indices
        .iter()
        .map(|&idx| store.items()[idx].clone())
        .collect();
    let levels = store.levels().to_vec();
    let current_page = page().clamp(1, view.total_pages);

    let on_mark = {
        let progress = ctx.progress();
        use_callback(move |(word, word_status): (String, WordStatus)| {
            let progress = Arc::clone(&progress);
            spawn(async move {
                if let Err(err) = progress.set_status(&word, word_status).await {
                    notice.set(Some(format!("Progress could not be saved: {err}.")));
                }
                refresh += 1;
            });
        })
    };

    let selected_item = selected().and_then(|idx| visible.get(idx).cloned());
    let visible_len = visible.len();

    rsx! {
        div { class: "page dictionary",
            div { class: "dictionary__controls",
                input {
                    class: "dictionary__search",
                    r#type: "text",
                    placeholder: "Search word or meaning...",
                    value: "{search}",
                    oninput: move |evt| {
                        search.set(evt.value());
                        page.set(1);
                        selected.set(None);
                    },
                }
                div { class: "filter-row",
                    for filter in [StatusFilter::All, StatusFilter::Learning, StatusFilter::Mastered] {
                        button {
                            class: if status_filter() == filter { "chip chip--active" } else { "chip" },
                            onclick: move |_| {
                                status_filter.set(filter);
                                page.set(1);
                                selected.set(None);
                            },
                            "{filter.label()}"
                        }
                    }
                }
                div { class: "filter-row",
                    button {
                        class: if level_filter().is_none() { "chip chip--level chip--active" } else { "chip chip--level" },
                        onclick: move |_| {
                            level_filter.set(None);
                            page.set(1);
                            selected.set(None);
                        },
                        "All Levels"
                    }
                    for level in levels {
                        button {
                            class: if level_filter() == Some(level) { "chip chip--level chip--active" } else { "chip chip--level" },
                            onclick: move |_| {
                                level_filter.set(Some(level));
                                page.set(1);
                                selected.set(None);
                            },
                            "Lv {level}"
                        }
                    }
                }
            }

            div { class: "dictionary__list",
                if visible.is_empty() {
                    p { class: "muted dictionary__empty", "No words found." }
                } else {
                    for (idx, item) in visible.iter().enumerate() {
                        div {
                            class: "word-row",
                            key: "{item.word}",
                            onclick: move |_| selected.set(Some(idx)),
                            div {
                                div { class: "word-row__head",
                                    span { class: "word-row__word", "{item.word}" }
                                    span { class: "muted", "Level {item.level}" }
                                }
                                div { class: "word-row__meaning", "{item.content.core_meaning}" }
                            }
                            StatusBadge { status: display_of(&snapshot, &item.word) }
                        }
                    }
                }
            }

            if !view.search_mode {
                div { class: "dictionary__footer",
                    span { "Page {current_page} of {view.total_pages}" }
                    div { class: "pager",
                        button {
                            class: "btn btn-secondary",
                            disabled: current_page == 1,
                            onclick: move |_| {
                                page.set(current_page.saturating_sub(1).max(1));
                                selected.set(None);
                            },
                            "Prev"
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: current_page >= view.total_pages,
                            onclick: move |_| {
                                page.set((current_page + 1).min(view.total_pages));
                                selected.set(None);
                            },
                            "Next"
                        }
                    }
                }
            }

            if let Some(message) = notice() {
                NoticeBar { message }
            }

            if let Some(item) = selected_item {
                WordDetail {
                    item,
                    status: display_of(&snapshot, &selected_word(&visible, selected()).unwrap_or_default()),
                    can_prev: selected().is_some_and(|idx| idx > 0),
                    can_next: selected().is_some_and(|idx| idx + 1 < visible_len),
                    on_close: move |_| selected.set(None),
                    on_prev: move |_| {
                        if let Some(idx) = selected() {
                            selected.set(Some(idx.saturating_sub(1)));
                        }
                    },
                    on_next: move |_| {
                        if let Some(idx) = selected() {
                            selected.set(Some((idx + 1).min(visible_len.saturating_sub(1))));
                        }
                    },
                    on_mark,
                }
            }
        }
    }
}

fn display_of(snapshot: &memoark_core::model::ProgressMap, word: &str) -> DisplayStatus {
    DisplayStatus::from_persisted(snapshot.get(word).map(|entry| entry.status))
}

fn selected_word(visible: &[VocabItem], selected: Option<usize>) -> Option<String> {
    selected
        .and_then(|idx| visible.get(idx))
        .map(|item| item.word.clone())
}

#[component]
fn StatusBadge(status: DisplayStatus) -> Element {
    let class = match status {
        DisplayStatus::Unseen => "badge badge--unseen",
        DisplayStatus::Learning => "badge badge--learning",
        DisplayStatus::Mastered => "badge badge--mastered",
    };
    rsx! {
        span { class: "{class}", "{status.label()}" }
    }
}

#[component]
fn WordDetail(
    item: VocabItem,
    status: DisplayStatus,
    can_prev: bool,
    can_next: bool,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_mark: Callback<(String, WordStatus)>,
) -> Element {
    let word_for_learning = item.word.clone();
    let word_for_mastered = item.word.clone();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal word-detail", role: "dialog", aria_modal: "true",
                header { class: "word-detail__header",
                    div {
                        div { class: "word-detail__title",
                            h3 { "{item.word}" }
                            span { class: "muted word-detail__pos", "{item.pos}" }
                        }
                        div { class: "word-detail__badges",
                            span { class: "badge badge--unseen", "Level {item.level}" }
                            StatusBadge { status }
                        }
                    }
                    button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Close" }
                }

                div { class: "word-detail__body",
                    p { class: "word-detail__ipa", "{item.content.ipa}" }
                    div { class: "word-detail__meaning", "{item.content.core_meaning}" }

                    section {
                        h4 { "Definitions" }
                        for def in &item.content.definitions {
                            div { class: "definition",
                                p { "{def.en}" }
                                p { class: "muted", "{def.cn}" }
                            }
                        }
                    }

                    if let Some(collocations) = &item.content.collocations {
                        section {
                            h4 { "Collocations" }
                            div { class: "collocation-grid",
                                for coll in collocations {
                                    div { class: "collocation",
                                        span { class: "collocation__phrase", "{coll.phrase}" }
                                        span { class: "muted", "{coll.cn}" }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(examples) = &item.content.examples {
                        section {
                            h4 { "Examples" }
                            ul {
                                for example in examples {
                                    li {
                                        div { "{example.en}" }
                                        div { class: "muted", "{example.cn}" }
                                    }
                                }
                            }
                        }
                    }
                }

                footer { class: "word-detail__footer",
                    div { class: "pager",
                        button {
                            class: "btn btn-secondary",
                            disabled: !can_prev,
                            onclick: move |_| on_prev.call(()),
                            "Prev"
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: !can_next,
                            onclick: move |_| on_next.call(()),
                            "Next"
                        }
                    }
                    div { class: "word-detail__actions",
                        button {
                            class: "btn btn-learning",
                            disabled: status == DisplayStatus::Learning,
                            onclick: move |_| on_mark.call((word_for_learning.clone(), WordStatus::Learning)),
                            "Mark Learning"
                        }
                        button {
                            class: "btn btn-mastered",
                            disabled: status == DisplayStatus::Mastered,
                            onclick: move |_| on_mark.call((word_for_mastered.clone(), WordStatus::Mastered)),
                            "Mark Mastered"
                        }
                    }
                }
            }
        }
    }
}
