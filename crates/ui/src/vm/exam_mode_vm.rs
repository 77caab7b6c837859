use ielts_core::tasks::ExamMode;

/// Landing-page card for one exam mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamModeCardVm {
    pub mode: ExamMode,
    pub title: &'static str,
    pub duration_label: String,
}

#[must_use]
pub fn map_exam_mode_cards() -> Vec<ExamModeCardVm> {
    ExamMode::ALL
        .into_iter()
        .map(|mode| ExamModeCardVm {
            mode,
            title: mode.title(),
            duration_label: format!("{} minutes", mode.duration_minutes()),
        })
        .collect()
}
