//! Sequencer configuration.

use chrono::Duration;

/// Configuration parameters for the sequencer.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    /// Minimum separation between successive trains entering the same
    /// single-track section (minutes).
    pub headway_mins: i64,
}

impl SequencerConfig {
    /// Create a new configuration with the given headway.
    pub fn new(headway_mins: i64) -> Self {
        Self { headway_mins }
    }

    /// Returns the headway as a Duration.
    pub fn headway(&self) -> Duration {
        Duration::minutes(self.headway_mins)
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self { headway_mins: 5 }
    }
}
