//! Notification contract of the sequencer.
//!
//! Events queue up inside the sequencer and are drained by the host after
//! each transport call or tick; the host forwards them to whatever callback
//! surface it exposes (step-change and completion handlers).

use serde::{Deserialize, Serialize};

use crate::step::OperationStep;

/// Discrete notifications emitted while sequencing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PlaybackEvent {
    /// The current step changed, either by timed advance or explicit seek.
    StepChanged {
        step_index: usize,
        total_steps: usize,
        step: OperationStep,
    },
    /// Playback reached the end of history naturally. Fires exactly once per
    /// completed run.
    Completed,
}

impl PlaybackEvent {
    #[inline]
    pub fn is_step_change(&self) -> bool {
        matches!(self, Self::StepChanged { .. })
    }
}
