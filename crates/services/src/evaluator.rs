use std::time::Duration;

use async_trait::async_trait;
use ielts_core::tasks::WritingTask;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::EvaluatorError;

/// Text revealed in place of an evaluation when the backend fails.
pub const EVALUATION_FAILED: &str = "Failed to process request";

/// Upper bound on one evaluation round trip.
pub const DEFAULT_EVALUATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Source of the evaluation text for a submitted draft.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// # Errors
    ///
    /// Returns `EvaluatorError` when no usable evaluation could be produced.
    async fn evaluate(&self, submission: &str) -> Result<String, EvaluatorError>;
}

/// Hands back the same evaluation for every submission.
#[derive(Debug, Clone)]
pub struct CannedEvaluator {
    text: String,
}

impl CannedEvaluator {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Evaluator for CannedEvaluator {
    async fn evaluate(&self, _submission: &str) -> Result<String, EvaluatorError> {
        Ok(self.text.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub url: String,
    pub script_path: String,
    pub timeout: Duration,
}

impl EvaluatorConfig {
    #[must_use]
    pub fn new(url: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            script_path: script_path.into(),
            timeout: DEFAULT_EVALUATION_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[must_use]
pub fn script_env_var(task: WritingTask) -> &'static str {
    match task {
        WritingTask::One => "IELTS_WRITING1_SCRIPT",
        WritingTask::Two => "IELTS_WRITING2_SCRIPT",
    }
}

#[must_use]
pub fn default_script_path(task: WritingTask) -> &'static str {
    match task {
        WritingTask::One => "src/writing_1_claude.py",
        WritingTask::Two => "src/writing_2_claude.py",
    }
}

/// Posts the draft to an evaluation endpoint that runs `script_path`.
#[derive(Clone)]
pub struct HttpEvaluator {
    client: Client,
    config: EvaluatorConfig,
}

impl HttpEvaluator {
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Evaluator for HttpEvaluator {
    async fn evaluate(&self, submission: &str) -> Result<String, EvaluatorError> {
        let payload = EvaluateRequest {
            message: submission,
            script_path: &self.config.script_path,
        };

        let response = self
            .client
            .post(&self.config.url)
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<EvaluateResponse> = response.json().await.ok();
            return Err(match body.and_then(|body| body.error) {
                Some(message) => EvaluatorError::Rejected(message),
                None => EvaluatorError::HttpStatus(status),
            });
        }

        let body: EvaluateResponse = response.json().await?;
        let text = body
            .response
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(EvaluatorError::EmptyResponse)?;

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateRequest<'a> {
    message: &'a str,
    script_path: &'a str,
}

#[derive(Debug, Deserialize)]
struct EvaluateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}
