use dioxus::prelude::*;
use dioxus_router::Link;
use ielts_core::tasks::ExamMode;

use crate::routes::Route;
use crate::vm::{ExamModeCardVm, map_exam_mode_cards};

#[component]
pub fn HomeView() -> Element {
    let cards = map_exam_mode_cards();

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h1 { class: "view-title", "IELTS Practice Exam" }
                p { class: "view-subtitle", "Choose an exam mode to start practicing" }
            }
            div { class: "mode-grid",
                for card in cards {
                    ModeCard { key: "{card.title}", card }
                }
            }
        }
    }
}

#[component]
fn ModeCard(card: ExamModeCardVm) -> Element {
    let target = match card.mode {
        ExamMode::Reading => Route::Reading {},
        ExamMode::WritingOne => Route::WritingOne {},
        ExamMode::WritingTwo => Route::WritingTwo {},
    };

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-description", "{card.duration_label}" }
            Link { class: "btn btn-primary", to: target, "Start Practice" }
        }
    }
}
