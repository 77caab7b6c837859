#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The task could not be set up.
    InvalidTask,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidTask => "This task could not be loaded. Please try another one.",
        }
    }
}
