use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn ReadingView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Reading Test" }
            p { "Reading practice is not available yet." }
            Link { class: "btn btn-secondary", to: Route::Home {}, "Back" }
        }
    }
}
