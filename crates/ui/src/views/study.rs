use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use memoark_core::model::{DisplayStatus, VocabItem, WordStatus};
use services::StudySession;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{CatalogLoadError, NoticeBar};

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    let Some(store) = catalog.store() else {
        return rsx! {
            CatalogLoadError { message: catalog.error_message().unwrap_or_default().to_string() }
        };
    };

    let items: Vec<VocabItem> = store.items().to_vec();
    let mut session = use_signal({
        let items = items.clone();
        move || StudySession::draw(&items, &mut rand::rng())
    });
    let mut flipped = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);

    let on_answer = {
        let progress = ctx.progress();
        use_callback(move |status: WordStatus| {
            let Some(word) = session.read().current_card().map(|card| card.word.clone()) else {
                return;
            };
            let progress = Arc::clone(&progress);
            spawn(async move {
                if let Err(err) = progress.set_status(&word, status).await {
                    notice.set(Some(format!("Progress could not be saved: {err}.")));
                }
                session.write().advance();
                flipped.set(false);
            });
        })
    };

    if session.read().is_empty() {
        return rsx! {
            div { class: "page study study--empty",
                p { class: "muted", "No words available to study." }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Dashboard {});
                    },
                    "Back to dashboard"
                }
            }
        };
    }

    if session.read().is_finished() {
        let total = session.read().total();
        return rsx! {
            div { class: "page study study--done",
                h2 { "Great job!" }
                p { class: "muted", "You finished this round of {total} words." }
                div { class: "study__done-actions",
                    button {
                        class: "primary-action",
                        onclick: move |_| {
                            let items = items.clone();
                            session.set(StudySession::draw(&items, &mut rand::rng()));
                            flipped.set(false);
                        },
                        "Start another round"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Dashboard {});
                        },
                        "Back to dashboard"
                    }
                }
            }
        };
    }

    let guard = session.read();
    let Some(card) = guard.current_card() else {
        return rsx! {
            div { class: "page study" }
        };
    };
    let card = card.clone();
    let position = guard.position();
    let total = guard.total();
    drop(guard);

    let current_status = DisplayStatus::from_persisted(
        ctx.progress()
            .export_snapshot()
            .get(&card.word)
            .map(|entry| entry.status),
    );
    let mastered = current_status == DisplayStatus::Mastered;

    rsx! {
        div { class: "page study",
            header { class: "study__header",
                span { class: "muted", "Study Session" }
                span { class: "study__counter", "{position} / {total}" }
            }

            if flipped() {
                div {
                    class: "flashcard flashcard--back",
                    onclick: move |_| flipped.set(false),
                    p { class: "flashcard__ipa", "{card.content.ipa}" }
                    p { class: "flashcard__meaning", "{card.content.core_meaning}" }
                    div { class: "flashcard__definitions",
                        for def in &card.content.definitions {
                            div { class: "definition",
                                p { "{def.en}" }
                                p { class: "muted", "{def.cn}" }
                            }
                        }
                    }
                    if let Some(examples) = &card.content.examples {
                        div { class: "flashcard__examples",
                            for example in examples.iter().take(2) {
                                div { class: "example",
                                    p { "{example.en}" }
                                    p { class: "muted", "{example.cn}" }
                                }
                            }
                        }
                    }
                    span { class: "muted flashcard__hint", "Tap to flip back" }
                }
            } else {
                div {
                    class: "flashcard flashcard--front",
                    onclick: move |_| flipped.set(true),
                    span { class: "chip chip--level", "Lv {card.level}" }
                    h2 { class: "flashcard__word", "{card.word}" }
                    p { class: "muted", "{card.pos}" }
                    span { class: "muted flashcard__hint", "Tap to Flip" }
                }
            }

            div { class: "study__controls",
                button {
                    class: "btn btn-learning",
                    onclick: move |_| on_answer.call(WordStatus::Learning),
                    "I Forgot / Hard"
                }
                button {
                    class: "btn btn-mastered",
                    disabled: mastered,
                    onclick: move |_| on_answer.call(WordStatus::Mastered),
                    if mastered { "Mastered" } else { "I Remember" }
                }
            }

            if let Some(message) = notice() {
                NoticeBar { message }
            }
        }
    }
}
