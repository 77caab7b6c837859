mod exam_mode_vm;
mod writing_vm;

pub use exam_mode_vm::{ExamModeCardVm, map_exam_mode_cards};
pub use writing_vm::{MessageVm, TimerVm, WritingVm};
