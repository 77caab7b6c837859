use std::sync::{Arc, Mutex};
use std::time::Duration;

use ielts_core::model::SessionConfig;
use ielts_core::{GateRejected, TimerRun, WritingSession};
use tokio::sync::watch;

use crate::evaluator::{CannedEvaluator, EVALUATION_FAILED, Evaluator};
use crate::reveal::{RevealOutcome, RevealPace, lock, notify, run_reveal};

const TICK: Duration = Duration::from_secs(1);

/// Drives one writing session: reveals, evaluation, and the countdown.
///
/// Cloning shares the same session. Separate instances never share state.
#[derive(Clone)]
pub struct WritingSessionService {
    session: Arc<Mutex<WritingSession>>,
    changes: Arc<watch::Sender<u64>>,
    evaluator: Arc<dyn Evaluator>,
    pace: RevealPace,
}

impl WritingSessionService {
    /// A session whose evaluation is the configured sample text.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let evaluator = Arc::new(CannedEvaluator::new(config.evaluation_text()));
        Self::with_evaluator(config, evaluator)
    }

    #[must_use]
    pub fn with_evaluator(config: SessionConfig, evaluator: Arc<dyn Evaluator>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            session: Arc::new(Mutex::new(WritingSession::new(config))),
            changes: Arc::new(changes),
            evaluator,
            pace: RevealPace::default(),
        }
    }

    #[must_use]
    pub fn with_pace(mut self, pace: RevealPace) -> Self {
        self.pace = pace;
        self
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> WritingSession {
        lock(&self.session).clone()
    }

    /// Receiver that changes whenever the session is mutated.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Start (or restart) the task and reveal the prompt.
    ///
    /// A reveal still running from an earlier task ends without further
    /// effect.
    pub async fn start_task(&self) -> RevealOutcome {
        let ticket = lock(&self.session).start_task();
        tracing::info!(generation = ticket.generation().value(), "task started");
        notify(&self.changes);
        run_reveal(&self.session, &self.changes, &ticket, self.pace).await
    }

    /// Record the draft and return its word count.
    pub fn update_draft(&self, text: &str) -> usize {
        let count = lock(&self.session).update_draft(text);
        notify(&self.changes);
        count
    }

    /// Submit `draft` and reveal the evaluation.
    ///
    /// # Errors
    ///
    /// Returns `GateRejected` when the draft is empty, below the minimum word
    /// count, or a reveal is in flight. Nothing changes in that case.
    pub async fn submit(&self, draft: &str) -> Result<RevealOutcome, GateRejected> {
        let ticket = match lock(&self.session).submit(draft) {
            Ok(ticket) => ticket,
            Err(err) => {
                tracing::debug!(%err, "submission rejected");
                return Err(err);
            }
        };
        tracing::info!(
            generation = ticket.generation().value(),
            words = ielts_core::text::word_count(draft),
            "submission accepted"
        );
        notify(&self.changes);

        let text = match self.evaluator.evaluate(draft).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "evaluation failed");
                EVALUATION_FAILED.to_string()
            }
        };

        if !lock(&self.session).is_current(&ticket) {
            return Ok(RevealOutcome::Superseded);
        }
        let ticket = ticket.with_text(text);
        Ok(run_reveal(&self.session, &self.changes, &ticket, self.pace).await)
    }

    /// Submit the stored draft.
    ///
    /// # Errors
    ///
    /// See [`WritingSessionService::submit`].
    pub async fn submit_draft(&self) -> Result<RevealOutcome, GateRejected> {
        let draft = lock(&self.session).draft().to_string();
        self.submit(&draft).await
    }

    /// Returns the run to hand to [`WritingSessionService::run_timer`], or
    /// `None` if the clock did not start.
    pub fn start_timer(&self) -> Option<TimerRun> {
        let run = lock(&self.session).timer_mut().start();
        notify(&self.changes);
        run
    }

    pub fn pause_timer(&self) {
        lock(&self.session).timer_mut().pause();
        notify(&self.changes);
    }

    pub fn reset_timer(&self) {
        lock(&self.session).timer_mut().reset();
        notify(&self.changes);
    }

    /// Tick once per second until `run` stops being the current run.
    pub async fn run_timer(&self, run: TimerRun) {
        loop {
            tokio::time::sleep(TICK).await;
            let keep_going = lock(&self.session).timer_mut().tick(run);
            notify(&self.changes);
            if !keep_going {
                tracing::debug!(run = run.value(), "timer run ended");
                break;
            }
        }
    }
}
