//! Sequencer configuration.

use serde::{Deserialize, Serialize};

/// Smallest accepted step delay.
pub const MIN_SPEED_MS: f32 = 1.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between step advances, in milliseconds.
    pub speed_ms: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed_ms: 1000.0 }
    }
}
