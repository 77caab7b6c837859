mod home;
mod reading;
mod state;
mod timer;
mod writing;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use reading::ReadingView;
pub use state::ViewError;
pub use timer::TimerControls;
pub use writing::{WritingOneView, WritingTwoView, WritingView};
