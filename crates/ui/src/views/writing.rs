use dioxus::prelude::*;
use ielts_core::tasks::WritingTask;
use services::WritingSessionService;

use crate::context::AppContext;
use crate::views::{TimerControls, ViewError};
use crate::vm::WritingVm;

#[component]
pub fn WritingOneView() -> Element {
    rsx! { WritingView { task: WritingTask::One } }
}

#[component]
pub fn WritingTwoView() -> Element {
    rsx! { WritingView { task: WritingTask::Two } }
}

#[component]
pub fn WritingView(task: WritingTask) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_hook(|| {
        ctx.writing_session(task).map_err(|err| {
            tracing::error!(%err, task = task.number(), "invalid writing task");
            ViewError::InvalidTask
        })
    });

    match session {
        Ok(session) => rsx! { WritingSessionPanel { task, session: SessionHandle(session) } },
        Err(err) => rsx! {
            div { class: "page",
                p { "{err.message()}" }
            }
        },
    }
}

/// Props wrapper; a page keeps the same session for its whole lifetime.
#[derive(Clone)]
struct SessionHandle(WritingSessionService);

impl PartialEq for SessionHandle {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn WritingSessionPanel(task: WritingTask, session: SessionHandle) -> Element {
    let svc = session.0;
    let vm = use_signal(|| WritingVm::from_session(task, &svc.snapshot()));
    let mut show_stats = use_signal(|| false);

    let changes = use_hook(|| svc.subscribe());
    let svc_for_sync = svc.clone();
    use_future(move || {
        let svc = svc_for_sync.clone();
        let mut changes = changes.clone();
        let mut vm = vm;
        async move {
            vm.set(WritingVm::from_session(task, &svc.snapshot()));
            while changes.changed().await.is_ok() {
                vm.set(WritingVm::from_session(task, &svc.snapshot()));
            }
        }
    });

    let on_start = {
        let svc = svc.clone();
        move |()| {
            if let Some(run) = svc.start_timer() {
                let svc = svc.clone();
                spawn(async move { svc.run_timer(run).await });
            }
        }
    };
    let on_pause = {
        let svc = svc.clone();
        move |()| svc.pause_timer()
    };
    let on_reset = {
        let svc = svc.clone();
        move |()| svc.reset_timer()
    };
    let on_new_task = {
        let svc = svc.clone();
        move |_: MouseEvent| {
            let svc = svc.clone();
            spawn(async move {
                svc.start_task().await;
            });
        }
    };
    let on_submit = {
        let svc = svc.clone();
        move |_: MouseEvent| {
            let svc = svc.clone();
            spawn(async move {
                if let Err(err) = svc.submit_draft().await {
                    tracing::trace!(%err, "submission ignored");
                }
            });
        }
    };
    let on_input = {
        let svc = svc.clone();
        move |evt: FormEvent| {
            svc.update_draft(&evt.value());
        }
    };

    let view = vm.read().clone();
    let stats = view.stats;

    rsx! {
        div { class: "page writing-page",
            header { class: "writing-header",
                div { class: "writing-heading",
                    h1 { class: "view-title", "{view.title}" }
                    span { class: view.status_class, "{view.status_label}" }
                }
                TimerControls {
                    timer: view.timer.clone(),
                    on_start,
                    on_pause,
                    on_reset,
                }
            }
            div { class: "writing-body",
                section { class: "transcript",
                    for message in view.messages.iter() {
                        div { key: "{message.id}", class: message.class,
                            p { class: "message-content", "{message.content}" }
                            if message.revealing {
                                span { class: "reveal-caret" }
                            }
                        }
                    }
                    if view.show_thinking {
                        div { class: "thinking", "Assistant is thinking..." }
                    }
                }
                section { class: "draft",
                    textarea {
                        class: "draft-input",
                        placeholder: "Write your response here...",
                        value: "{view.draft}",
                        oninput: on_input,
                    }
                    div { class: "draft-footer",
                        div { class: "draft-meta",
                            span { class: view.word_class, "{view.word_label}" }
                            button {
                                class: "btn btn-outline btn-sm",
                                r#type: "button",
                                onclick: move |_| {
                                    let open = show_stats();
                                    show_stats.set(!open);
                                },
                                "Statistics"
                            }
                        }
                        div { class: "draft-actions",
                            button {
                                class: "btn btn-outline",
                                r#type: "button",
                                disabled: !view.can_start_task,
                                onclick: on_new_task,
                                "New Task"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !view.can_submit,
                                onclick: on_submit,
                                "Submit"
                            }
                        }
                    }
                    if show_stats() {
                        dl { class: "draft-stats",
                            dt { "Words" }
                            dd { "{stats.words}" }
                            dt { "Characters" }
                            dd { "{stats.characters}" }
                            dt { "Paragraphs" }
                            dd { "{stats.paragraphs}" }
                        }
                    }
                }
            }
        }
    }
}
