use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DashboardView, DictionaryView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/study", StudyView)] Study {},
        #[route("/dictionary?:status", DictionaryView)] Dictionary { status: Option<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            AppHeader {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-header__logo", "MemoArk" }
            nav { class: "app-header__nav",
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Dictionary { status: None }, "Dictionary" }
                Link { to: Route::Study {}, "Study" }
            }
        }
    }
}
