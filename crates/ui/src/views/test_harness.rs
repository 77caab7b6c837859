use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use ielts_core::model::{ConfigError, SessionConfig};
use ielts_core::tasks::WritingTask;
use services::{RevealPace, WritingSessionService};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, ReadingView, WritingView};

/// Hands out sessions with a short prompt and instant reveals, and keeps
/// them so tests can drive the same session the view renders.
#[derive(Default)]
pub struct TestApp {
    min_words: usize,
    sessions: Mutex<Vec<WritingSessionService>>,
}

impl TestApp {
    pub fn with_min_words(min_words: usize) -> Self {
        Self {
            min_words,
            sessions: Mutex::new(Vec::new()),
        }
    }

    pub fn last_session(&self) -> WritingSessionService {
        self.sessions
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("view created a session")
    }
}

impl UiApp for TestApp {
    fn writing_session(&self, task: WritingTask) -> Result<WritingSessionService, ConfigError> {
        let config = SessionConfig::new(
            task.time_limit_secs(),
            self.min_words,
            "Describe the chart.",
            "Band 7.0 overall.",
        )?;
        let session = WritingSessionService::new(config).with_pace(RevealPace::instant());
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Reading,
    Writing(WritingTask),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Reading => rsx! { ReadingView {} },
        ViewKind::Writing(task) => rsx! { WritingView { task } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, app: TestApp) -> ViewHarness {
    let app = Arc::new(app);
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            view,
        },
    );
    ViewHarness { dom, app }
}
