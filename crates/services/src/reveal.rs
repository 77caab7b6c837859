use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use ielts_core::{RevealStep, RevealTicket, WritingSession};
use rand::Rng;
use tokio::sync::watch;

use crate::error::RevealPaceError;

/// Bounds for the randomized delay between revealed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPace {
    min_ms: u64,
    max_ms: u64,
}

impl Default for RevealPace {
    fn default() -> Self {
        Self {
            min_ms: 15,
            max_ms: 25,
        }
    }
}

impl RevealPace {
    /// # Errors
    ///
    /// Returns `RevealPaceError::Inverted` if `min_ms > max_ms`.
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, RevealPaceError> {
        if min_ms > max_ms {
            return Err(RevealPaceError::Inverted { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// No delay at all; reveals still go through every step.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    /// Parse `"15-25"` or a single `"20"`.
    ///
    /// # Errors
    ///
    /// Returns `RevealPaceError` for non-numeric or inverted ranges.
    pub fn parse(raw: &str) -> Result<Self, RevealPaceError> {
        let malformed = || RevealPaceError::Malformed {
            raw: raw.to_string(),
        };
        let (min, max) = match raw.trim().split_once('-') {
            Some((min, max)) => (min.trim(), max.trim()),
            None => (raw.trim(), raw.trim()),
        };
        let min_ms = min.parse::<u64>().map_err(|_| malformed())?;
        let max_ms = max.parse::<u64>().map_err(|_| malformed())?;
        Self::new(min_ms, max_ms)
    }

    #[must_use]
    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    #[must_use]
    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    fn next_delay(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::rng().random_range(self.min_ms..=self.max_ms))
    }
}

/// How a reveal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Completed,
    /// The transcript was replaced before the reveal finished.
    Superseded,
}

impl From<RevealStep> for RevealOutcome {
    fn from(step: RevealStep) -> Self {
        match step {
            RevealStep::Applied => RevealOutcome::Completed,
            RevealStep::Stale => RevealOutcome::Superseded,
        }
    }
}

/// Reveal `ticket` one character at a time into the shared session.
///
/// The lock is only held for a single mutation, never across a sleep. Every
/// mutation bumps `changes` so observers can re-read the session.
pub async fn run_reveal(
    session: &Mutex<WritingSession>,
    changes: &watch::Sender<u64>,
    ticket: &RevealTicket,
    pace: RevealPace,
) -> RevealOutcome {
    for ch in ticket.text().chars() {
        tokio::time::sleep(pace.next_delay()).await;
        let step = lock(session).append_char(ticket, ch);
        if step == RevealStep::Stale {
            tracing::debug!(
                message_id = %ticket.message_id(),
                generation = ticket.generation().value(),
                "reveal superseded"
            );
            return RevealOutcome::Superseded;
        }
        notify(changes);
    }

    let outcome = RevealOutcome::from(lock(session).finish_reveal(ticket));
    notify(changes);
    outcome
}

pub(crate) fn lock(session: &Mutex<WritingSession>) -> std::sync::MutexGuard<'_, WritingSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn notify(changes: &watch::Sender<u64>) {
    changes.send_modify(|revision| *revision = revision.wrapping_add(1));
}
