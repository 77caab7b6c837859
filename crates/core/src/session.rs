//! Writing-session state machine: transcript, submission gate, and the
//! bookkeeping that keeps reveals from landing on a replaced transcript.

use thiserror::Error;

use crate::model::{Message, MessageId, MessageRole, SessionConfig};
use crate::text::word_count;
use crate::timer::SessionTimer;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why a submission was refused. State is untouched when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GateRejected {
    #[error("draft is empty")]
    EmptyDraft,
    #[error("draft has {words} words, at least {min_words} required")]
    TooFewWords { words: usize, min_words: usize },
    #[error("a reveal is still in progress")]
    Loading,
}

//
// ─── REVEAL BOOKKEEPING ────────────────────────────────────────────────────────
//

/// Counter bumped every time the transcript is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Everything a driver needs to reveal text into one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTicket {
    generation: Generation,
    message_id: MessageId,
    text: String,
}

impl RevealTicket {
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Same target, different text. Used when the text arrives after the
    /// message was created.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self
        }
    }
}

/// Outcome of one reveal mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Applied,
    /// The ticket belongs to a replaced transcript or a frozen message.
    Stale,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct WritingSession {
    config: SessionConfig,
    timer: SessionTimer,
    transcript: Vec<Message>,
    generation: Generation,
    next_id: MessageId,
    loading: bool,
    task_started: bool,
    draft: String,
    word_count: usize,
}

impl WritingSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let timer = SessionTimer::new(config.time_limit_secs());
        Self {
            config,
            timer,
            transcript: Vec::new(),
            generation: Generation(0),
            next_id: MessageId::new(1),
            loading: false,
            task_started: false,
            draft: String::new(),
            word_count: 0,
        }
    }

    /// Replace the transcript with a fresh prompt message and hand back the
    /// reveal that fills it.
    ///
    /// Any reveal still running against the old transcript goes stale.
    pub fn start_task(&mut self) -> RevealTicket {
        self.generation = Generation(self.generation.0.wrapping_add(1));
        self.transcript.clear();
        self.task_started = true;
        self.loading = true;

        let id = self.alloc_id();
        self.transcript
            .push(Message::revealing(id, MessageRole::Prompt));

        RevealTicket {
            generation: self.generation,
            message_id: id,
            text: self.config.prompt_text().to_string(),
        }
    }

    /// Store the draft and return its word count.
    pub fn update_draft(&mut self, text: &str) -> usize {
        text.clone_into(&mut self.draft);
        self.word_count = word_count(text);
        self.word_count
    }

    /// # Errors
    ///
    /// Returns the first gate condition `draft` fails.
    pub fn check_gate(&self, draft: &str) -> Result<(), GateRejected> {
        if draft.trim().is_empty() {
            return Err(GateRejected::EmptyDraft);
        }
        let words = word_count(draft);
        if words < self.config.min_words() {
            return Err(GateRejected::TooFewWords {
                words,
                min_words: self.config.min_words(),
            });
        }
        if self.loading {
            return Err(GateRejected::Loading);
        }
        Ok(())
    }

    /// Append the draft and an empty evaluation message, returning the reveal
    /// for the evaluation.
    ///
    /// # Errors
    ///
    /// Returns `GateRejected` without touching state when the draft is empty,
    /// too short, or a reveal is in flight.
    pub fn submit(&mut self, draft: &str) -> Result<RevealTicket, GateRejected> {
        self.check_gate(draft)?;

        let user_id = self.alloc_id();
        self.transcript
            .push(Message::complete(user_id, MessageRole::User, draft));

        let evaluation_id = self.alloc_id();
        self.transcript
            .push(Message::revealing(evaluation_id, MessageRole::Evaluation));
        self.loading = true;

        self.draft.clear();
        self.word_count = 0;

        Ok(RevealTicket {
            generation: self.generation,
            message_id: evaluation_id,
            text: self.config.evaluation_text().to_string(),
        })
    }

    /// Append one character for `ticket`'s reveal.
    pub fn append_char(&mut self, ticket: &RevealTicket, ch: char) -> RevealStep {
        if !self.is_current(ticket) {
            return RevealStep::Stale;
        }
        match self.message_mut(ticket.message_id) {
            Some(message) if message.is_revealing() => {
                message.push_char(ch);
                RevealStep::Applied
            }
            _ => RevealStep::Stale,
        }
    }

    /// Freeze the message and release the loading flag.
    pub fn finish_reveal(&mut self, ticket: &RevealTicket) -> RevealStep {
        if !self.is_current(ticket) {
            return RevealStep::Stale;
        }
        let Some(message) = self.message_mut(ticket.message_id) else {
            return RevealStep::Stale;
        };
        if !message.is_revealing() {
            return RevealStep::Stale;
        }
        message.finish();
        self.loading = false;
        RevealStep::Applied
    }

    /// Reveal the whole ticket in one go.
    pub fn reveal_all(&mut self, ticket: &RevealTicket) -> RevealStep {
        for ch in ticket.text().chars() {
            if self.append_char(ticket, ch) == RevealStep::Stale {
                return RevealStep::Stale;
            }
        }
        self.finish_reveal(ticket)
    }

    #[must_use]
    pub fn is_current(&self, ticket: &RevealTicket) -> bool {
        ticket.generation == self.generation
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut SessionTimer {
        &mut self.timer
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.transcript.iter().find(|message| message.id() == id)
    }

    #[must_use]
    pub fn revealing_message(&self) -> Option<&Message> {
        self.transcript.iter().find(|message| message.is_revealing())
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn task_started(&self) -> bool {
        self.task_started
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn meets_minimum(&self) -> bool {
        self.word_count >= self.config.min_words()
    }

    /// Whether the stored draft would pass the gate right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check_gate(&self.draft).is_ok()
    }

    fn alloc_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.transcript.iter_mut().find(|message| message.id() == id)
    }
}
