use dioxus::prelude::*;

/// Terminal state for the main views when the catalog fetch failed.
///
/// Deliberately static: there is no retry, the message stands for the rest
/// of the session.
#[component]
pub fn CatalogLoadError(message: String) -> Element {
    rsx! {
        div { class: "page load-error",
            p { "{message}" }
        }
    }
}

/// One-line notice for non-fatal outcomes (backup results, write failures).
#[component]
pub fn NoticeBar(message: String) -> Element {
    rsx! {
        p { class: "notice", role: "status", "{message}" }
    }
}
