//! Relaxation exercises
//!
//! A fixed list of calming activities, plus the paced breathing session in
//! [`breathing`].

use std::io::Write;

pub mod breathing;

pub use breathing::{BreathingTimer, NoopPacer, Pacer, Phase, SleepPacer};

/// Suggested calming activities, in display order
const ACTIVITIES: [&str; 6] = [
    "Slow breathing: inhale for four counts, exhale for six, five times.",
    "Meditation: sit quietly for two minutes and follow your breath.",
    "Mindfulness: name five things you can see and four you can hear.",
    "Body scan: relax each muscle group from your toes up to your forehead.",
    "Gratitude: write down three things that went well today.",
    "Visualization: picture a calm place and notice its sounds and colours.",
];

/// The static relaxation sequence
#[derive(Debug, Default, Clone, Copy)]
pub struct CalmingExercises;

impl CalmingExercises {
    pub fn new() -> Self {
        Self
    }

    pub fn activities(&self) -> &'static [&'static str] {
        &ACTIVITIES
    }

    /// Print the numbered list
    pub fn show<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Here are some calming activities to try:")?;
        for (i, activity) in self.activities().iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, activity)?;
        }
        Ok(())
    }
}
