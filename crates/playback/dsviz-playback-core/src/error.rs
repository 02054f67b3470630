//! Error types for the playback sequencer.

/// Failures the sequencer cannot absorb silently. Everything else
/// (out-of-range jumps, missing steps, empty histories) is ignored locally.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PlaybackError {
    /// A zero, negative, or non-finite step delay was requested.
    #[error("invalid playback speed: {speed_ms} ms (must be a positive finite delay)")]
    InvalidSpeed { speed_ms: f32 },
}
