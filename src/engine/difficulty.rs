//! Difficulty tiers.

use std::fmt;
use std::time::Duration;

/// Selects the tick delay and which high-score line a session reads and writes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Delay between two simulation ticks.
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(125),
            Difficulty::Normal => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(75),
        }
    }

    /// Line of the high-score file holding this tier.
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
