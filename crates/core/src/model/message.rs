use serde::{Deserialize, Serialize};

use crate::model::ids::MessageId;

/// Who a transcript entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    Prompt,
    User,
    Evaluation,
}

impl MessageRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::Prompt => "prompt",
            MessageRole::User => "user",
            MessageRole::Evaluation => "evaluation",
        }
    }
}

/// One entry of the writing-session transcript.
///
/// `content` only grows while `is_revealing` is set; once the reveal ends the
/// message is frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: MessageRole,
    content: String,
    is_revealing: bool,
}

impl Message {
    /// An empty message that a reveal will fill in.
    #[must_use]
    pub(crate) fn revealing(id: MessageId, role: MessageRole) -> Self {
        Self {
            id,
            role,
            content: String::new(),
            is_revealing: true,
        }
    }

    /// A message whose content is known and shown at once.
    #[must_use]
    pub(crate) fn complete(id: MessageId, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            is_revealing: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn role(&self) -> MessageRole {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.is_revealing
    }

    /// Returns false when the message is frozen and the char was dropped.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if !self.is_revealing {
            return false;
        }
        self.content.push(ch);
        true
    }

    pub(crate) fn finish(&mut self) {
        self.is_revealing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_message_ignores_appends() {
        let mut msg = Message::revealing(MessageId::new(1), MessageRole::Prompt);
        assert!(msg.push_char('a'));
        msg.finish();
        assert!(!msg.push_char('b'));
        assert_eq!(msg.content(), "a");
        assert!(!msg.is_revealing());
    }

    #[test]
    fn complete_message_is_not_revealing() {
        let msg = Message::complete(MessageId::new(2), MessageRole::User, "my essay");
        assert_eq!(msg.role().as_str(), "user");
        assert_eq!(msg.content(), "my essay");
        assert!(!msg.is_revealing());
    }
}
