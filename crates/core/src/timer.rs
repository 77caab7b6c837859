//! Countdown clock for a timed writing task.

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Observable state of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    /// Terminal until `reset`.
    Expired,
}

/// Token for one start-to-stop span of the clock.
///
/// Ticks carry the run they were scheduled for; once the clock is paused,
/// reset, or expires, ticks from that run no longer land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerRun(u64);

impl TimerRun {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

//
// ─── TIMER ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    time_limit_secs: u32,
    remaining_secs: u32,
    running: bool,
    run: u64,
}

impl SessionTimer {
    #[must_use]
    pub fn new(time_limit_secs: u32) -> Self {
        Self {
            time_limit_secs,
            remaining_secs: time_limit_secs,
            running: false,
            run: 0,
        }
    }

    /// Start counting down.
    ///
    /// Returns the new run when the clock actually started, `None` when it was
    /// already running or has no time left.
    pub fn start(&mut self) -> Option<TimerRun> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        self.run = self.run.wrapping_add(1);
        Some(TimerRun(self.run))
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            self.run = self.run.wrapping_add(1);
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.time_limit_secs;
        self.run = self.run.wrapping_add(1);
    }

    /// Apply one elapsed second for `run`.
    ///
    /// Returns whether the ticker for `run` should keep going.
    pub fn tick(&mut self, run: TimerRun) -> bool {
        if !self.running || run.0 != self.run {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            self.run = self.run.wrapping_add(1);
            return false;
        }
        true
    }

    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.remaining_secs == 0 {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        !self.running && self.remaining_secs > 0
    }

    /// Reset is pointless on an untouched clock.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.running || self.remaining_secs != self.time_limit_secs
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// Formats seconds as `M:SS`, minutes unpadded.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}
