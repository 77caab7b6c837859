use dioxus::prelude::*;

use crate::vm::TimerVm;

/// Countdown readout with Start/Pause and Reset.
#[component]
pub fn TimerControls(
    timer: TimerVm,
    on_start: EventHandler<()>,
    on_pause: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let label_class = if timer.expired {
        "timer-label timer-expired"
    } else {
        "timer-label"
    };

    rsx! {
        div { class: "timer",
            span { id: "timer-label", class: label_class, "{timer.label}" }
            div { class: "timer-actions",
                if timer.running {
                    button {
                        class: "btn btn-outline btn-sm",
                        r#type: "button",
                        onclick: move |_| on_pause.call(()),
                        "Pause"
                    }
                } else {
                    button {
                        class: "btn btn-outline btn-sm",
                        r#type: "button",
                        disabled: !timer.can_start,
                        onclick: move |_| on_start.call(()),
                        "Start"
                    }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    r#type: "button",
                    disabled: !timer.can_reset,
                    onclick: move |_| on_reset.call(()),
                    "Reset"
                }
            }
        }
    }
}
