//! Exam modes offered on the landing page and the built-in writing tasks.

use serde::{Deserialize, Serialize};

use crate::model::{ConfigError, SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamMode {
    Reading,
    WritingOne,
    WritingTwo,
}

impl ExamMode {
    pub const ALL: [ExamMode; 3] = [ExamMode::Reading, ExamMode::WritingOne, ExamMode::WritingTwo];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ExamMode::Reading => "Reading Test",
            ExamMode::WritingOne => "Writing Task 1",
            ExamMode::WritingTwo => "Writing Task 2",
        }
    }

    #[must_use]
    pub fn duration_minutes(self) -> u32 {
        match self {
            ExamMode::Reading => 60,
            ExamMode::WritingOne => 20,
            ExamMode::WritingTwo => 40,
        }
    }

    /// The writing task behind this mode, if it is a writing mode.
    #[must_use]
    pub fn writing_task(self) -> Option<WritingTask> {
        match self {
            ExamMode::Reading => None,
            ExamMode::WritingOne => Some(WritingTask::One),
            ExamMode::WritingTwo => Some(WritingTask::Two),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritingTask {
    One,
    Two,
}

impl WritingTask {
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            WritingTask::One => 1,
            WritingTask::Two => 2,
        }
    }

    #[must_use]
    pub fn time_limit_secs(self) -> u32 {
        match self {
            WritingTask::One => 1200,
            WritingTask::Two => 2400,
        }
    }

    #[must_use]
    pub fn min_words(self) -> usize {
        match self {
            WritingTask::One => 150,
            WritingTask::Two => 250,
        }
    }

    #[must_use]
    pub fn prompt_text(self) -> &'static str {
        match self {
            WritingTask::One => TASK_ONE_PROMPT,
            WritingTask::Two => TASK_TWO_PROMPT,
        }
    }

    #[must_use]
    pub fn sample_evaluation(self) -> &'static str {
        match self {
            WritingTask::One => TASK_ONE_EVALUATION,
            WritingTask::Two => TASK_TWO_EVALUATION,
        }
    }

    /// # Errors
    ///
    /// Never fails for the built-in tasks; the `Result` comes from
    /// `SessionConfig::new`.
    pub fn config(self) -> Result<SessionConfig, ConfigError> {
        SessionConfig::new(
            self.time_limit_secs(),
            self.min_words(),
            self.prompt_text(),
            self.sample_evaluation(),
        )
    }
}

const TASK_ONE_PROMPT: &str = "The graph below shows the number of international students studying in different faculties at Smith University in 2019.

Summarize the information by selecting and reporting the main features, and make comparisons where relevant.

Write at least 150 words.";

const TASK_ONE_EVALUATION: &str = "Here's my evaluation of your response:

Task Achievement: 7.0
✓ Covers key features effectively
✓ Clear overview provided
⚠ Some comparisons could be more explicit

Coherence and Cohesion: 6.5
✓ Logical organization
✓ Good use of paragraphing
⚠ Some transitions could be smoother

Lexical Resource: 7.0
✓ Good range of vocabulary
✓ Appropriate academic style
⚠ Few minor word choice issues

Would you like specific suggestions for improvement?";

const TASK_TWO_PROMPT: &str = "Some people believe that it is better to live in a big city, while others prefer to live in the countryside.

Discuss both views and give your own opinion.

Write at least 250 words.";

const TASK_TWO_EVALUATION: &str = "Here's my evaluation of your response:

Task Achievement: 7.0
✓ Clear position throughout
✓ Main ideas well-developed
⚠ Some supporting examples could be more specific

Coherence and Cohesion: 7.0
✓ Clear overall progression
✓ Effective paragraphing
✓ Good use of linking devices

Lexical Resource: 6.5
✓ Good range of vocabulary
✓ Topic-specific language used well
⚠ Few imprecise word choices

Grammatical Range and Accuracy: 7.0
✓ Mix of simple and complex structures
✓ Good control of grammar
⚠ Minor errors do not impede communication

Would you like specific suggestions for improvement?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tasks_are_valid() {
        for task in [WritingTask::One, WritingTask::Two] {
            let config = task.config().unwrap();
            assert_eq!(config.min_words(), task.min_words());
            assert!(config.prompt_text().contains(&format!("at least {}", task.min_words())));
        }
    }

    #[test]
    fn mode_durations_match_task_limits() {
        for mode in ExamMode::ALL {
            if let Some(task) = mode.writing_task() {
                assert_eq!(mode.duration_minutes() * 60, task.time_limit_secs());
            }
        }
        assert!(ExamMode::Reading.writing_task().is_none());
    }
}
