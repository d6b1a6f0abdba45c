//! Guided breathing timer
//!
//! Runs a fixed number of in/hold/out cycles. Waiting is delegated to a
//! [`Pacer`] so the session can block for real while tests skip the delay.

use std::io::Write;
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::config::AppConfig;
use crate::Result;

/// One timed step of a breathing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    In,
    Hold,
    Out,
}

impl Phase {
    /// Phases in the order a cycle runs them
    pub const CYCLE: [Phase; 3] = [Phase::In, Phase::Hold, Phase::Out];

    /// Console prompt for this phase
    pub fn prompt(&self) -> &'static str {
        match self {
            Phase::In => "Breathe in... 🫁",
            Phase::Hold => "Hold... ✋",
            Phase::Out => "Breathe out... 💨",
        }
    }

    /// Short label for progress output
    pub fn label(&self) -> &'static str {
        match self {
            Phase::In => "in",
            Phase::Hold => "hold",
            Phase::Out => "out",
        }
    }
}

/// Waits out a breathing phase
pub trait Pacer {
    fn pause(&mut self, phase: Phase, duration: Duration);
}

/// Blocks the current thread for the full phase
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    show_progress: bool,
}

const PROGRESS_TICK: Duration = Duration::from_millis(100);

/// Progress bar units for a duration, saturating at `u64::MAX`
fn progress_units(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl SleepPacer {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    fn sleep_with_progress(&self, phase: Phase, duration: Duration) {
        let pb = ProgressBar::new(progress_units(duration));
        pb.set_style(
            ProgressStyle::with_template("{bar:30.cyan/blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message(phase.label());

        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            let step = PROGRESS_TICK.min(duration - elapsed);
            thread::sleep(step);
            elapsed += step;
            pb.set_position(progress_units(elapsed));
        }
        pb.finish_and_clear();
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, phase: Phase, duration: Duration) {
        if self.show_progress {
            self.sleep_with_progress(phase, duration);
        } else {
            thread::sleep(duration);
        }
    }
}

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _phase: Phase, _duration: Duration) {}
}

/// Paced breathing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingTimer {
    cycles: u32,
    phase_duration: Duration,
}

impl Default for BreathingTimer {
    fn default() -> Self {
        Self {
            cycles: 3,
            phase_duration: Duration::from_secs(4),
        }
    }
}

pub const OPENING_MESSAGE: &str = "🧘 Starting calming breathing session...";
pub const CLOSING_MESSAGE: &str = "🧘 Session complete. Hope you're feeling more relaxed!";

impl BreathingTimer {
    pub fn new(cycles: u32, phase_duration: Duration) -> Self {
        Self {
            cycles,
            phase_duration,
        }
    }

    /// Timer with the configured cycles and phase length
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.breathing.cycles, config.phase_duration()?))
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn phase_duration(&self) -> Duration {
        self.phase_duration
    }

    /// Run every cycle, writing each prompt before its pause. Returns the
    /// number of phase prompts written.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W, pacer: &mut dyn Pacer) -> Result<usize> {
        writeln!(out, "{}", OPENING_MESSAGE)?;
        let mut prompts = 0;

        for cycle in 1..=self.cycles {
            debug!(cycle, "breathing cycle");
            writeln!(out)?;
            for phase in Phase::CYCLE {
                writeln!(out, "{}", phase.prompt())?;
                out.flush()?;
                pacer.pause(phase, self.phase_duration);
                prompts += 1;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", CLOSING_MESSAGE)?;
        Ok(prompts)
    }
}
