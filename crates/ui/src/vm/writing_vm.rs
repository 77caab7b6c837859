use ielts_core::model::{Message, MessageId, MessageRole};
use ielts_core::tasks::WritingTask;
use ielts_core::text::DraftStats;
use ielts_core::{TimerPhase, WritingSession};

/// UI-ready transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVm {
    pub id: MessageId,
    pub class: &'static str,
    pub content: String,
    pub revealing: bool,
}

impl MessageVm {
    #[must_use]
    pub fn from_message(message: &Message) -> Self {
        let class = match message.role() {
            MessageRole::User => "message message-user",
            MessageRole::Prompt => "message message-prompt",
            MessageRole::Evaluation => "message message-evaluation",
        };
        Self {
            id: message.id(),
            class,
            content: message.content().to_string(),
            revealing: message.is_revealing(),
        }
    }
}

/// Timer display and which controls are enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub label: String,
    pub running: bool,
    pub can_start: bool,
    pub can_reset: bool,
    pub expired: bool,
}

/// Everything the writing page renders, derived from a session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritingVm {
    pub title: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub timer: TimerVm,
    pub messages: Vec<MessageVm>,
    pub show_thinking: bool,
    pub draft: String,
    pub word_label: String,
    pub word_class: &'static str,
    pub stats: DraftStats,
    pub can_start_task: bool,
    pub can_submit: bool,
}

impl WritingVm {
    #[must_use]
    pub fn from_session(task: WritingTask, session: &WritingSession) -> Self {
        let timer = session.timer();
        let timer = TimerVm {
            label: timer.display(),
            running: timer.is_running(),
            can_start: timer.can_start(),
            can_reset: timer.can_reset(),
            expired: timer.phase() == TimerPhase::Expired,
        };

        let (status_label, status_class) = if session.task_started() {
            ("In Progress", "badge badge-default")
        } else {
            ("Not Started", "badge badge-secondary")
        };

        let word_count = session.word_count();
        let word_class = if session.meets_minimum() {
            "badge badge-success"
        } else {
            "badge badge-secondary"
        };

        Self {
            title: format!("Writing Task {}", task.number()),
            status_label,
            status_class,
            timer,
            messages: session
                .messages()
                .iter()
                .map(MessageVm::from_message)
                .collect(),
            show_thinking: session.is_loading() && session.revealing_message().is_none(),
            draft: session.draft().to_string(),
            word_label: format!("{word_count} words"),
            word_class,
            stats: DraftStats::from_text(session.draft()),
            can_start_task: !session.is_loading(),
            can_submit: session.can_submit(),
        }
    }
}
