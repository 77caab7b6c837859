#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod reveal;
pub mod writing_session;

pub use error::{EvaluatorError, RevealPaceError};
pub use evaluator::{
    CannedEvaluator, DEFAULT_EVALUATION_TIMEOUT, EVALUATION_FAILED, Evaluator, EvaluatorConfig,
    HttpEvaluator,
};
pub use reveal::{RevealOutcome, RevealPace, run_reveal};
pub use writing_session::WritingSessionService;
