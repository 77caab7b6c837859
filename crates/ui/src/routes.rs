use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, ReadingView, WritingOneView, WritingTwoView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/reading", ReadingView)] Reading {},
        #[route("/writing-1", WritingOneView)] WritingOne {},
        #[route("/writing-2", WritingTwoView)] WritingTwo {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                Link { class: "brand", to: Route::Home {}, "IELTS Practice" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
