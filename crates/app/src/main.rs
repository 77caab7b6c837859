mod logging;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ielts_core::model::ConfigError;
use ielts_core::tasks::WritingTask;
use services::evaluator::{default_script_path, script_env_var};
use services::{
    CannedEvaluator, DEFAULT_EVALUATION_TIMEOUT, Evaluator, EvaluatorConfig, HttpEvaluator,
    RevealPace, RevealPaceError, WritingSessionService,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidEvalUrl { raw: String },
    InvalidRevealPace(RevealPaceError),
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidEvalUrl { raw } => write!(f, "invalid --eval-url value: {raw}"),
            ArgsError::InvalidRevealPace(err) => write!(f, "invalid --reveal-ms value: {err}"),
            ArgsError::InvalidTimeout { raw } => {
                write!(f, "invalid --eval-timeout value: {raw} (expected whole seconds > 0)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--eval-url <url>] [--script-task1 <path>]");
    eprintln!("                      [--script-task2 <path>] [--reveal-ms <min-max>]");
    eprintln!("                      [--eval-timeout <secs>]");
    eprintln!();
    eprintln!("Without --eval-url the built-in sample evaluations are shown.");
    eprintln!("Defaults:");
    eprintln!("  --script-task1 {}", default_script_path(WritingTask::One));
    eprintln!("  --script-task2 {}", default_script_path(WritingTask::Two));
    eprintln!("  --reveal-ms 15-25");
    eprintln!("  --eval-timeout {}", DEFAULT_EVALUATION_TIMEOUT.as_secs());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  IELTS_EVAL_URL, IELTS_WRITING1_SCRIPT, IELTS_WRITING2_SCRIPT, IELTS_REVEAL_MS,");
    eprintln!("  IELTS_EVAL_TIMEOUT_SECS");
    eprintln!("  RUST_LOG (default: info,services=debug,ui=debug)");
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    eval_url: Option<String>,
    script_task1: String,
    script_task2: String,
    reveal_pace: RevealPace,
    eval_timeout: Duration,
    help: bool,
}

fn parse_timeout(raw: &str) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ArgsError::InvalidTimeout {
            raw: raw.to_string(),
        }),
    }
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut eval_url = env("IELTS_EVAL_URL").filter(|value| !value.trim().is_empty());
        let mut script_task1 = env(script_env_var(WritingTask::One))
            .unwrap_or_else(|| default_script_path(WritingTask::One).into());
        let mut script_task2 = env(script_env_var(WritingTask::Two))
            .unwrap_or_else(|| default_script_path(WritingTask::Two).into());
        let mut reveal_pace = match env("IELTS_REVEAL_MS") {
            Some(raw) => RevealPace::parse(&raw).map_err(ArgsError::InvalidRevealPace)?,
            None => RevealPace::default(),
        };
        let mut eval_timeout = match env("IELTS_EVAL_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_EVALUATION_TIMEOUT,
        };
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--eval-url" => {
                    let value = require_value(args, "--eval-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidEvalUrl { raw: value });
                    }
                    eval_url = Some(value);
                }
                "--script-task1" => script_task1 = require_value(args, "--script-task1")?,
                "--script-task2" => script_task2 = require_value(args, "--script-task2")?,
                "--reveal-ms" => {
                    let value = require_value(args, "--reveal-ms")?;
                    reveal_pace =
                        RevealPace::parse(&value).map_err(ArgsError::InvalidRevealPace)?;
                }
                "--eval-timeout" => {
                    eval_timeout = parse_timeout(&require_value(args, "--eval-timeout")?)?;
                }
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            eval_url,
            script_task1,
            script_task2,
            reveal_pace,
            eval_timeout,
            help,
        })
    }

    fn script_for(&self, task: WritingTask) -> &str {
        match task {
            WritingTask::One => &self.script_task1,
            WritingTask::Two => &self.script_task2,
        }
    }
}

struct DesktopApp {
    args: Args,
}

impl UiApp for DesktopApp {
    fn writing_session(&self, task: WritingTask) -> Result<WritingSessionService, ConfigError> {
        let config = task.config()?;
        let evaluator: Arc<dyn Evaluator> = match &self.args.eval_url {
            Some(url) => Arc::new(HttpEvaluator::new(
                EvaluatorConfig::new(url.clone(), self.args.script_for(task))
                    .with_timeout(self.args.eval_timeout),
            )),
            None => Arc::new(CannedEvaluator::new(config.evaluation_text())),
        };
        Ok(WritingSessionService::with_evaluator(config, evaluator)
            .with_pace(self.args.reveal_pace))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    logging::init();
    match &args.eval_url {
        Some(url) => tracing::info!(
            %url,
            timeout_secs = args.eval_timeout.as_secs(),
            "evaluations served by endpoint"
        ),
        None => tracing::info!("using built-in sample evaluations"),
    }
    tracing::debug!(
        min_ms = args.reveal_pace.min_ms(),
        max_ms = args.reveal_pace.max_ms(),
        "reveal pace"
    );

    let context = build_app_context(Arc::new(DesktopApp { args }));

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("IELTS Practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let mut iter = argv.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        })
    }

    #[test]
    fn defaults_use_canned_evaluation() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.eval_url, None);
        assert_eq!(args.script_for(WritingTask::One), "src/writing_1_claude.py");
        assert_eq!(args.script_for(WritingTask::Two), "src/writing_2_claude.py");
        assert_eq!(args.reveal_pace, RevealPace::default());
        assert_eq!(args.eval_timeout, DEFAULT_EVALUATION_TIMEOUT);
        assert!(!args.help);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--eval-url", "http://localhost:3000/api/chat", "--reveal-ms", "0"],
            &[
                ("IELTS_EVAL_URL", "http://env/api/chat"),
                ("IELTS_WRITING2_SCRIPT", "scripts/task2.py"),
                ("IELTS_REVEAL_MS", "5-10"),
            ],
        )
        .unwrap();
        assert_eq!(args.eval_url.as_deref(), Some("http://localhost:3000/api/chat"));
        assert_eq!(args.script_for(WritingTask::Two), "scripts/task2.py");
        assert_eq!(args.reveal_pace, RevealPace::instant());
        assert_eq!(args.reveal_pace.max_ms(), 0);
    }

    #[test]
    fn eval_timeout_from_flag_or_env() {
        let args = parse(&[], &[("IELTS_EVAL_TIMEOUT_SECS", "30")]).unwrap();
        assert_eq!(args.eval_timeout, Duration::from_secs(30));
        let args = parse(&["--eval-timeout", "5"], &[("IELTS_EVAL_TIMEOUT_SECS", "30")]).unwrap();
        assert_eq!(args.eval_timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_env_url_is_ignored() {
        let args = parse(&[], &[("IELTS_EVAL_URL", "  ")]).unwrap();
        assert_eq!(args.eval_url, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse(&["--eval-url"], &[]),
            Err(ArgsError::MissingValue { flag: "--eval-url" })
        ));
        assert!(matches!(
            parse(&["--eval-url", "localhost"], &[]),
            Err(ArgsError::InvalidEvalUrl { .. })
        ));
        assert!(matches!(
            parse(&["--reveal-ms", "25-15"], &[]),
            Err(ArgsError::InvalidRevealPace(_))
        ));
        assert!(matches!(
            parse(&["--eval-timeout", "0"], &[]),
            Err(ArgsError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            parse(&[], &[("IELTS_EVAL_TIMEOUT_SECS", "soon")]),
            Err(ArgsError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            parse(&["--task", "2"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn desktop_app_builds_sessions_for_both_tasks() {
        let app = DesktopApp {
            args: parse(&[], &[]).unwrap(),
        };
        for task in [WritingTask::One, WritingTask::Two] {
            let session = app.writing_session(task).unwrap().snapshot();
            assert_eq!(session.timer().time_limit_secs(), task.time_limit_secs());
            assert_eq!(session.config().min_words(), task.min_words());
        }
    }
}
