#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod tasks;
pub mod text;
pub mod timer;

pub use session::{GateRejected, Generation, RevealStep, RevealTicket, WritingSession};
pub use timer::{SessionTimer, TimerPhase, TimerRun, format_clock};
