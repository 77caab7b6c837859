use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("time limit must be greater than zero")]
    ZeroTimeLimit,
    #[error("minimum word count must be greater than zero")]
    ZeroMinWords,
}

/// Static configuration supplied by the host page for one writing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    time_limit_secs: u32,
    min_words: usize,
    prompt_text: String,
    evaluation_text: String,
}

impl SessionConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeLimit` if `time_limit_secs` is zero.
    /// Returns `ConfigError::ZeroMinWords` if `min_words` is zero.
    pub fn new(
        time_limit_secs: u32,
        min_words: usize,
        prompt_text: impl Into<String>,
        evaluation_text: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if min_words == 0 {
            return Err(ConfigError::ZeroMinWords);
        }
        Ok(Self {
            time_limit_secs,
            min_words,
            prompt_text: prompt_text.into(),
            evaluation_text: evaluation_text.into(),
        })
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn min_words(&self) -> usize {
        self.min_words
    }

    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    #[must_use]
    pub fn evaluation_text(&self) -> &str {
        &self.evaluation_text
    }
}
