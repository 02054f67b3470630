//! Playback core for data-structure visualization
//!
//! A single-owner, tick-driven sequencer that replays recorded operation
//! steps with transport controls, plus stateless keyframe translators that
//! map one step into renderer-agnostic highlight/animation descriptors.
//!
//! The sequencer never blocks: the host drives it by calling
//! [`Sequencer::tick`] with elapsed milliseconds each frame and drains the
//! queued [`PlaybackEvent`]s afterwards.

pub mod config;
pub mod error;
pub mod keyframes;
pub mod outputs;
pub mod sequencer;
pub mod step;

// Re-exports for consumers (renderers)
pub use config::PlaybackConfig;
pub use error::PlaybackError;
pub use keyframes::{Easing, LinearAnimation, LinearKeyframes, TreeAnimation, TreeKeyframes, Vec2};
pub use outputs::PlaybackEvent;
pub use sequencer::Sequencer;
pub use step::{OperationKind, OperationStep, StepTarget};
