use std::sync::Arc;

use ielts_core::model::ConfigError;
use ielts_core::tasks::WritingTask;
use services::WritingSessionService;

pub trait UiApp: Send + Sync {
    /// A fresh session for `task`. Every visit to a writing page owns its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the task configuration is invalid.
    fn writing_session(&self, task: WritingTask) -> Result<WritingSessionService, ConfigError>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        Self { app }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the task configuration is invalid.
    pub fn writing_session(
        &self,
        task: WritingTask,
    ) -> Result<WritingSessionService, ConfigError> {
        self.app.writing_session(task)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
